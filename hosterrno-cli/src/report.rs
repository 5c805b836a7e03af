use human_repr::*;
use std::time::{Duration, Instant};

/// `--timings` output
pub(crate) struct Reporter {
    timings: bool,
    reported: bool,
    bottom_line: bool,
    start: Instant,
    overall: Option<Duration>,
    pub load_time: Option<Duration>,
    pub rows: usize,
    pub render_time: Option<Duration>,
    pub bytes: usize,
    pub write_time: Option<Duration>,
}
impl Reporter {
    pub fn new(timings: bool) -> Self {
        Self {
            timings,
            reported: false,
            bottom_line: true,
            start: Instant::now(),
            overall: None,
            load_time: None,
            rows: 0,
            render_time: None,
            bytes: 0,
            write_time: None,
        }
    }
    pub fn print(&mut self) {
        if !self.timings || self.reported {
            return;
        }
        self.reported = true;
        let overall = *self.overall.get_or_insert_with(|| self.start.elapsed());
        let share = |d: Duration| d.as_secs_f64() / overall.as_secs_f64() * 100.0;
        println!("----------------");
        println!("overall time:  {:>8}", overall.human_duration().to_string());
        if let Some(load) = self.load_time {
            println!(
                "loading table: {:>8} ({:6.3}%) @ {:>13}",
                load.human_duration().to_string(),
                share(load),
                (self.rows as f64 / load.as_secs_f64())
                    .human_throughput(" row")
                    .to_string()
            );
        }
        if let Some(render) = self.render_time {
            println!(
                "rendering:     {:>8} ({:6.3}%) @ {:>13}",
                render.human_duration().to_string(),
                share(render),
                (self.bytes as f64 / render.as_secs_f64())
                    .human_throughput_bytes()
                    .to_string()
            );
        }
        if let Some(write) = self.write_time {
            println!(
                "writing file:  {:>8} ({:6.3}%) @ {:>13}",
                write.human_duration().to_string(),
                share(write),
                (self.bytes as f64 / write.as_secs_f64())
                    .human_throughput_bytes()
                    .to_string()
            );
        }
        if self.bottom_line {
            println!("----------------");
        }
    }
    // happy exit
    pub fn finish(&mut self) {
        self.bottom_line = false; // don't print a line after the report, everything went ok
        self.print();
    }
}
