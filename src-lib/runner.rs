// This file is part of draw-bench and is licenced under the GNU GPL v3.0.
// See LICENSE file for full text.
// Copyright © 2026 draw-bench contributors

//! The timed test runner and the results screen

use std::time::{Duration, Instant};

use debug_print::debug_println;
use log::{error, info, warn};
use rand::Rng;

use crate::canvas::Color;
use crate::error::BenchError;
use crate::font::Fonts;
use crate::results::{EndError, ResultLog, TestId};
use crate::screen::Screen;
use crate::settings::Settings;
use crate::util::frame_limiter::FrameLimiter;
use crate::util::numeric::frames_for_delay;
use crate::workload::{BenchmarkPlan, Workload};

/// where status text is drawn
const TEXT_ORIGIN: i32 = 10;
/// y offset of the first result line, before the per-line advance
const RESULTS_TOP: i32 = 30;

/// Owns everything the benchmark touches: the screen, the result log, the fonts and the frame limiter.
pub struct Harness<S> {
    screen: S,
    log: ResultLog,
    limiter: FrameLimiter,
    fps: u32,
    fonts: Fonts,
    foreground: Color,
    background: Color,
}

impl<S: Screen> Harness<S> {
    pub fn new(screen: S, settings: &Settings) -> Self {
        Harness {
            screen,
            log: ResultLog::default(),
            limiter: FrameLimiter::new(settings.tick_interval),
            fps: settings.fps(),
            fonts: settings.fonts(),
            foreground: settings.persisted.foreground,
            background: settings.persisted.background,
        }
    }

    pub fn results(&self) -> &ResultLog {
        &self.log
    }

    pub fn screen(&self) -> &S {
        &self.screen
    }

    pub fn into_screen(self) -> S {
        self.screen
    }

    /// Start a test named `name`. Guard frames fill `delay` before the clock starts, so none of the
    /// countdown is measured. Returns the new test's id.
    pub fn start(&mut self, name: &str, delay: Duration) -> Result<TestId, BenchError> {
        let id = self.log.next_id();
        info!("Delay before starting test {id} ({name})...");
        self.screen.set_title(&format!("Test {id} ({name}) running..."));

        let banner = format!("Test {id} ({name}) starting soon...");
        let frames = frames_for_delay(delay, self.fps);
        debug_println!("showing {frames} guard frames before test {id}");
        for _ in 0..frames {
            self.screen.pump_events()?;
            let frame = self.screen.frame();
            frame.fill(self.background);
            frame.draw_text(TEXT_ORIGIN, TEXT_ORIGIN, &banner, &self.fonts.ui, self.foreground, None);
            self.screen.present()?;
            self.limiter.tick();
        }
        self.clear()?;

        let id = self.log.begin(name, Instant::now());
        info!("Starting test {id} ({name})...");
        Ok(id)
    }

    /// End a test. `None` ends the most recently started test. Usage errors (nothing to end, a bad
    /// id, a test that already ended) are logged and leave the log untouched, returning `Ok(None)`.
    /// On success returns the measured duration.
    pub fn end(&mut self, id: Option<TestId>, delay: Duration) -> Result<Option<Duration>, BenchError> {
        let end_time = Instant::now();
        let (banner, duration) = match self.log.finish(id, end_time) {
            Ok(completed) => {
                info!(
                    "Test {} ({}) ended. Duration: {} seconds.",
                    completed.id,
                    completed.name,
                    completed.duration.as_secs_f64()
                );
                (format!("Test {} ({}) ended.", completed.id, completed.name), completed.duration)
            }
            Err(e @ (EndError::Empty | EndError::NoActiveTest(_))) => {
                warn!("{e}");
                return Ok(None);
            }
            Err(e) => {
                error!("{e} No test ended.");
                return Ok(None);
            }
        };

        // the workload's last frame stays visible behind the banner
        for _ in 0..frames_for_delay(delay, self.fps) {
            self.screen.pump_events()?;
            self.screen.frame().draw_text(
                TEXT_ORIGIN,
                TEXT_ORIGIN,
                &banner,
                &self.fonts.ui,
                self.foreground,
                Some(self.background),
            );
            self.screen.present()?;
            self.limiter.tick();
        }
        self.clear()?;

        Ok(Some(duration))
    }

    /// Run one workload between a `start` and an `end`.
    pub fn run_workload<R>(
        &mut self,
        workload: Workload,
        plan: &BenchmarkPlan,
        rng: &mut R,
    ) -> Result<Option<Duration>, BenchError>
    where
        R: Rng + ?Sized,
    {
        self.start(workload.name(), plan.start_delay)?;
        workload.run(&mut self.screen, &self.fonts, self.foreground, plan.shape_count, rng)?;
        self.end(None, plan.end_delay)
    }

    /// Run every workload of the plan, strictly in order.
    pub fn run_plan<R>(&mut self, plan: &BenchmarkPlan, rng: &mut R) -> Result<(), BenchError>
    where
        R: Rng + ?Sized,
    {
        for workload in &plan.workloads {
            self.run_workload(*workload, plan, rng)?;
        }
        Ok(())
    }

    /// Show the recorded durations until the user asks to exit. Fails with
    /// [`BenchError::NoResults`] if nothing was ever recorded.
    pub fn show_results(&mut self) -> Result<(), BenchError> {
        if self.log.is_empty() {
            return Err(BenchError::NoResults);
        }

        info!("Showing test results...");
        self.screen.set_title("Test results");
        let line_height = self.fonts.ui.cell_height() as i32;

        loop {
            let frame = self.screen.frame();
            frame.fill(self.background);
            frame.draw_text(TEXT_ORIGIN, TEXT_ORIGIN, "Press ESC to exit", &self.fonts.ui, self.foreground, None);
            for (line, test) in (1..).zip(self.log.iter()) {
                let y = RESULTS_TOP + line * line_height;
                frame.draw_text(TEXT_ORIGIN, y, &test.to_string(), &self.fonts.ui, self.foreground, None);
            }
            self.screen.present()?;

            match self.screen.pump_events() {
                Ok(()) => self.limiter.tick(),
                Err(BenchError::ExitRequested) => return Ok(()),
                Err(e) => return Err(e),
            }
        }
    }

    fn clear(&mut self) -> Result<(), BenchError> {
        self.screen.frame().fill(self.background);
        self.screen.present()
    }
}

#[cfg(test)]
mod test {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::canvas::{BLACK, WHITE};
    use crate::headless::HeadlessScreen;
    use crate::settings::PersistedSettings;
    use crate::workload::Suite;

    fn settings(fps: u32) -> Settings {
        let mut settings = Settings::default();
        settings.persisted.fps = fps;
        settings.tick_interval = crate::util::numeric::fps_to_tick_interval(fps);
        settings
    }

    fn harness(screen: HeadlessScreen) -> Harness<HeadlessScreen> {
        Harness::new(screen, &settings(30))
    }

    fn zero_delay_plan(suite: Suite) -> BenchmarkPlan {
        BenchmarkPlan {
            workloads: suite.workloads().to_vec(),
            start_delay: Duration::ZERO,
            end_delay: Duration::ZERO,
            shape_count: 5,
        }
    }

    #[test]
    fn two_tests_in_sequence() {
        let mut harness = harness(HeadlessScreen::new(32, 32));
        let a = harness.start("A", Duration::ZERO).unwrap();
        let a_duration = harness.end(None, Duration::ZERO).unwrap();
        let b = harness.start("B", Duration::ZERO).unwrap();
        let b_duration = harness.end(None, Duration::ZERO).unwrap();

        assert_eq!(a, TestId::from(0));
        assert_eq!(b, TestId::from(1));
        assert!(a_duration.is_some());
        assert!(b_duration.is_some());

        let log = harness.results();
        assert_eq!(log.len(), 2);
        let first = log.get(a).unwrap();
        let second = log.get(b).unwrap();
        assert_eq!(first.name, "A");
        assert_eq!(second.name, "B");
        assert!(first.end_time.unwrap() <= second.start_time);
        assert_eq!(first.duration, Some(first.end_time.unwrap() - first.start_time));
        assert_eq!(second.duration, Some(second.end_time.unwrap() - second.start_time));
    }

    #[test]
    fn zero_delay_skips_guard_frames() {
        let mut harness = harness(HeadlessScreen::new(8, 8));
        harness.start("A", Duration::ZERO).unwrap();
        harness.end(None, Duration::ZERO).unwrap();
        let screen = harness.screen();
        assert_eq!(screen.pumped(), 0);
        // start and end each clear the screen once
        assert_eq!(screen.presented(), 2);
    }

    #[test]
    fn guard_frames_follow_delay() {
        let mut harness = Harness::new(HeadlessScreen::new(64, 32), &settings(100));
        harness.start("A", Duration::from_millis(50)).unwrap();
        assert_eq!(harness.screen().pumped(), 5);
        assert_eq!(harness.screen().title(), "Test 0 (A) running...");

        harness.end(None, Duration::from_millis(30)).unwrap();
        assert_eq!(harness.screen().pumped(), 8);
        assert_eq!(harness.screen().presented(), 5 + 1 + 3 + 1);
    }

    #[test]
    fn guard_frames_are_not_measured() {
        let mut harness = Harness::new(HeadlessScreen::new(8, 8), &settings(100));
        let before_start = Instant::now();
        harness.start("A", Duration::from_millis(100)).unwrap();
        let start_time = harness.results().get(TestId::from(0)).unwrap().start_time;
        assert!(start_time - before_start >= Duration::from_millis(90));

        let duration = harness.end(None, Duration::from_millis(100)).unwrap().unwrap();
        assert!(duration < Duration::from_millis(90));
    }

    #[test]
    fn zero_fps_still_counts_down() {
        let settings = Settings::from_toml("fps = 0").unwrap();
        let mut harness = Harness::new(HeadlessScreen::new(8, 8), &settings);
        harness.start("A", Duration::from_secs(1)).unwrap();
        assert_eq!(harness.screen().pumped(), 1);
        assert_eq!(harness.results().len(), 1);
    }

    #[test]
    fn huge_font_scale_does_not_panic() {
        let settings = Settings::from_toml("ui_font_scale = 1000000000").unwrap();
        let mut harness = Harness::new(HeadlessScreen::new(32, 32).exit_after(1), &settings);
        harness.start("A", Duration::ZERO).unwrap();
        harness.end(None, Duration::ZERO).unwrap();
        harness.show_results().unwrap();
    }

    #[test]
    fn end_banner_draws_over_last_frame() {
        // exit on the second guard frame, before the closing clear
        let mut harness = Harness::new(HeadlessScreen::new(400, 60).exit_after(1), &settings(100));
        harness.start("A", Duration::ZERO).unwrap();
        harness.screen.frame().fill(WHITE);
        let result = harness.end(None, Duration::from_millis(100));
        assert!(matches!(result, Err(BenchError::ExitRequested)));
        assert!(harness.results().get(TestId::from(0)).unwrap().is_finished());

        let canvas = harness.screen().canvas();
        // the banner cells get the text background, everything else keeps the workload's pixels
        assert!(canvas.pixels().contains(&BLACK));
        assert_eq!(canvas.pixel(0, 0), Some(WHITE));
        assert_eq!(canvas.pixel(399, 59), Some(WHITE));
        assert_eq!(canvas.pixel(5, 40), Some(WHITE));
    }

    #[test]
    fn end_on_empty_log_is_noop() {
        let mut harness = harness(HeadlessScreen::new(8, 8));
        assert_eq!(harness.end(None, Duration::from_secs(1)).unwrap(), None);
        assert!(harness.results().is_empty());
        // no guard frames for a test that never ended
        assert_eq!(harness.screen().pumped(), 0);
    }

    #[test]
    fn end_out_of_range_is_noop() {
        let mut harness = harness(HeadlessScreen::new(8, 8));
        harness.start("A", Duration::ZERO).unwrap();
        assert_eq!(harness.end(Some(TestId::from(5)), Duration::ZERO).unwrap(), None);
        assert_eq!(harness.results().len(), 1);
        assert_eq!(harness.results().get(TestId::from(0)).unwrap().end_time, None);
    }

    #[test]
    fn end_without_active_test_is_noop() {
        let mut harness = harness(HeadlessScreen::new(8, 8));
        harness.start("A", Duration::ZERO).unwrap();
        harness.end(None, Duration::ZERO).unwrap();
        let first_end = harness.results().get(TestId::from(0)).unwrap().end_time;

        assert_eq!(harness.end(None, Duration::ZERO).unwrap(), None);
        assert_eq!(harness.results().get(TestId::from(0)).unwrap().end_time, first_end);
    }

    #[test]
    fn end_explicit_earlier_test() {
        let mut harness = harness(HeadlessScreen::new(8, 8));
        let a = harness.start("A", Duration::ZERO).unwrap();
        let b = harness.start("B", Duration::ZERO).unwrap();
        assert!(harness.end(Some(a), Duration::ZERO).unwrap().is_some());

        let log = harness.results();
        assert!(log.get(a).unwrap().is_finished());
        assert!(!log.get(b).unwrap().is_finished());
        assert_eq!(log.get(b).unwrap().name, "B");
    }

    #[test]
    fn exit_during_countdown_appends_nothing() {
        let mut harness = Harness::new(HeadlessScreen::new(8, 8).exit_after(2), &settings(100));
        let result = harness.start("A", Duration::from_millis(100));
        assert!(matches!(result, Err(BenchError::ExitRequested)));
        assert!(harness.results().is_empty());
    }

    #[test]
    fn exit_mid_workload_leaves_test_unfinished() {
        let mut harness = harness(HeadlessScreen::new(8, 8).exit_after(3));
        let mut rng = StdRng::seed_from_u64(1);
        let result = harness.run_plan(&zero_delay_plan(Suite::Extended), &mut rng);
        assert!(matches!(result, Err(BenchError::ExitRequested)));

        let log = harness.results();
        assert_eq!(log.len(), 1);
        assert!(!log.get(TestId::from(0)).unwrap().is_finished());
    }

    #[test]
    fn full_plan_records_every_workload() {
        let mut harness = harness(HeadlessScreen::new(48, 32));
        let mut rng = StdRng::seed_from_u64(2);
        let plan = zero_delay_plan(Suite::Extended);
        harness.run_plan(&plan, &mut rng).unwrap();

        let log = harness.results();
        assert_eq!(log.len(), plan.workloads.len());
        for ((index, test), workload) in log.iter().enumerate().zip(&plan.workloads) {
            assert_eq!(test.id.index(), index);
            assert_eq!(test.name, workload.name());
            assert!(test.is_finished());
        }
        for pair in log.iter().collect::<Vec<_>>().windows(2) {
            assert!(pair[0].start_time <= pair[1].start_time);
            assert!(pair[0].end_time.unwrap() <= pair[1].start_time);
        }
    }

    #[test]
    fn results_need_at_least_one_test() {
        let mut harness = harness(HeadlessScreen::new(8, 8));
        assert!(matches!(harness.show_results(), Err(BenchError::NoResults)));
        assert_eq!(harness.screen().presented(), 0);
    }

    #[test]
    fn results_screen_runs_until_exit() {
        let mut harness = harness(HeadlessScreen::new(400, 120).exit_after(2));
        harness.start("A", Duration::ZERO).unwrap();
        harness.end(None, Duration::ZERO).unwrap();
        harness.show_results().unwrap();

        let screen = harness.into_screen();
        assert_eq!(screen.title(), "Test results");
        // two clears, then three result frames: the third pump observes the exit request
        assert_eq!(screen.presented(), 2 + 3);
        assert!(screen.canvas().pixels().contains(&WHITE));
    }

    #[test]
    fn custom_colors_are_used() {
        let persisted = PersistedSettings {
            foreground: 0x00FF0000,
            background: 0x000000FF,
            ..PersistedSettings::default()
        };
        let settings = Settings {
            persisted,
            tick_interval: Duration::from_millis(1),
        };
        let mut harness = Harness::new(HeadlessScreen::new(8, 8), &settings);
        harness.start("A", Duration::ZERO).unwrap();
        assert!(harness.screen().canvas().pixels().iter().all(|pixel| *pixel == 0x000000FF));
        assert!(!harness.screen().canvas().pixels().contains(&BLACK));
    }
}
