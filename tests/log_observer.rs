use std::sync::Mutex;

use grow_array::GrowArr;
use grow_array::types::Global;
use grow_array::types::LogObserver;
use log::Level;
use log::Log;
use log::Metadata;
use log::Record;

static LINES: Mutex<Vec<String>> = Mutex::new(Vec::new());

struct Capture;

impl Log for Capture {
    fn enabled(&self, metadata: &Metadata) -> bool {
        return metadata.target() == "grow_array" && metadata.level() <= Level::Debug;
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            LINES.lock().unwrap().push(record.args().to_string());
        }
    }

    fn flush(&self) {}
}

static CAPTURE: Capture = Capture;

#[test]
fn events_reach_the_log() {
    log::set_logger(&CAPTURE).unwrap();
    log::set_max_level(log::LevelFilter::Debug);

    {
        let mut arr = GrowArr::<u16, Global, usize, LogObserver>::with_observer(LogObserver, 3).unwrap();
        arr.emplace_back(1).unwrap();
    }

    let lines = LINES.lock().unwrap();
    assert_eq!(
        *lines,
        [
            "grow: capacity 0 -> 3, relocated 0",
            "resize: length 0 -> 3, capacity = 3",
            "grow: capacity 3 -> 4, relocated 3",
            "release: capacity = 4",
        ]
    );
}
