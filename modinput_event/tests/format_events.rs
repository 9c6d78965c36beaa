use modinput_event::{hec, xml, BatchLimits, Event};
use serde_json::Value;

fn event(data: &str, unbroken: bool, done: bool) -> Event {
    Event::builder()
        .data(data)
        .time(1372274622.493)
        .index("main")
        .host("localhost")
        .source("Splunk")
        .sourcetype("misc")
        .stanza("test_scheme://test")
        .unbroken(unbroken)
        .done(done)
        .build()
        .unwrap()
}

#[test]
fn test_xml_format_events() {
    let fragments = [
        event("This is a test data1.", true, false),
        event("This is a test data2.", true, true),
    ];
    assert_eq!(
        xml::format_events(&fragments, &BatchLimits::default()),
        vec![
            "<stream>\
             <event stanza=\"test_scheme://test\" unbroken=\"1\">\
             <time>1372274622.493</time><index>main</index><host>localhost</host>\
             <source>Splunk</source><sourcetype>misc</sourcetype>\
             <data>This is a test data1.</data></event>\
             <event stanza=\"test_scheme://test\" unbroken=\"1\">\
             <time>1372274622.493</time><index>main</index><host>localhost</host>\
             <source>Splunk</source><sourcetype>misc</sourcetype>\
             <data>This is a test data2.</data><done /></event>\
             </stream>"
        ]
    );

    let single = [event("This is a test data3.", false, false)];
    assert_eq!(
        xml::format_events(&single, &BatchLimits::default()),
        vec![
            "<stream>\
             <event stanza=\"test_scheme://test\">\
             <time>1372274622.493</time><index>main</index><host>localhost</host>\
             <source>Splunk</source><sourcetype>misc</sourcetype>\
             <data>This is a test data3.</data></event>\
             </stream>"
        ]
    );
}

#[test]
fn test_xml_format_events_utf8() {
    let events = [event("This is utf-8 \u{2603} data4.", false, false)];
    assert_eq!(
        xml::format_events(&events, &BatchLimits::default()),
        vec![
            "<stream>\
             <event stanza=\"test_scheme://test\">\
             <time>1372274622.493</time><index>main</index><host>localhost</host>\
             <source>Splunk</source><sourcetype>misc</sourcetype>\
             <data>This is utf-8 \u{2603} data4.</data></event>\
             </stream>"
        ]
    );
}

#[test]
fn test_hec_format_events() {
    let fragments = [
        event("This is a test data1.", true, false),
        event("This is a test data2.", true, true),
    ];
    let batches = hec::format_events(&fragments, &BatchLimits::default()).unwrap();
    assert_eq!(batches.len(), 1);

    let lines: Vec<&str> = batches[0].split('\n').collect();
    assert_eq!(lines.len(), 2);

    for (line, data) in lines.iter().zip(["This is a test data1.", "This is a test data2."]) {
        let value: Value = serde_json::from_str(line).unwrap();
        let object = value.as_object().unwrap();

        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            ["event", "host", "index", "source", "sourcetype", "time"]
        );

        assert_eq!(value["event"], data);
        assert_eq!(value["host"], "localhost");
        assert_eq!(value["index"], "main");
        assert_eq!(value["source"], "Splunk");
        assert_eq!(value["sourcetype"], "misc");
        assert_eq!(value["time"], 1372274622.493);
    }
}

#[test]
fn test_hec_format_events_utf8() {
    let events = [event("This is utf-8 \u{2603} data4.", false, false)];
    let batches = hec::format_events(&events, &BatchLimits::default()).unwrap();
    let value: Value = serde_json::from_str(&batches[0]).unwrap();
    assert_eq!(value["event"], "This is utf-8 \u{2603} data4.");
}

#[test]
fn test_batch_order_survives_limits() {
    let events: Vec<Event> = (0..5)
        .map(|i| event(&format!("data{i}"), false, false))
        .collect();
    let limits = BatchLimits::default().with_max_events(2);

    let streams = xml::format_events(&events, &limits);
    assert_eq!(streams.len(), 3);
    let joined = streams.concat();
    for window in (0..4).map(|i| (format!("data{i}"), format!("data{}", i + 1))) {
        let first = joined.find(&window.0).unwrap();
        let second = joined.find(&window.1).unwrap();
        assert!(first < second);
    }

    let batches = hec::format_events(&events, &limits).unwrap();
    assert_eq!(batches.len(), 3);
    assert_eq!(
        batches.iter().map(|b| b.lines().count()).sum::<usize>(),
        5
    );
}
