// This file is part of draw-bench and is licenced under the GNU GPL v3.0.
// See LICENSE file for full text.
// Copyright © 2026 draw-bench contributors

use std::fs;
use std::io;
use std::path::PathBuf;
use std::time::Duration;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use winit::dpi::PhysicalSize;

use crate::canvas::{Color, BLACK, WHITE};
use crate::font::{Font, Fonts};
use crate::util::numeric::{fps_to_tick_interval, percent_of};
use crate::workload::{BenchmarkPlan, Suite};

lazy_static! {
    /// `None` when the platform has no notion of a home directory
    pub static ref CONFIG_PATH: Option<PathBuf> = directories::ProjectDirs::from("", "", "draw-bench")
        .map(|dirs| dirs.config_dir().join("config.toml"));
}

const DEFAULT_ASPECT_RATIO: (u32, u32) = (16, 9);
const DEFAULT_SCALE: u32 = 75;
const DEFAULT_SCREEN_PERCENTAGE: u32 = 50;
const DEFAULT_FPS: u32 = 30;
const DEFAULT_START_DELAY_SECS: u64 = 5;
const DEFAULT_END_DELAY_SECS: u64 = 1;
const DEFAULT_SHAPE_COUNT: u32 = 100;
const DEFAULT_UI_FONT_SCALE: u32 = 2;
const DEFAULT_TEST_FONT_SCALE: u32 = 1;

/// How the benchmark window is placed on screen
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayMode {
    /// decorated window of `aspect_ratio * scale`
    Windowed,
    /// borderless fullscreen on the current monitor
    Fullscreen,
    /// undecorated window of `aspect_ratio * scale`
    #[default]
    Borderless,
    /// decorated, resizable window of `aspect_ratio * scale`
    WindowedResizable,
    /// undecorated window covering `screen_percentage` of the monitor in each dimension
    BorderlessPercentage,
}

/// Concrete window configuration a [`DisplayMode`] resolves to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WindowLayout {
    pub size: PhysicalSize<u32>,
    pub decorations: bool,
    pub resizable: bool,
    pub fullscreen: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct PersistedSettings {
    pub display_mode: DisplayMode,
    pub aspect_ratio: (u32, u32),
    pub scale: u32,
    /// only used by [`DisplayMode::BorderlessPercentage`]
    pub screen_percentage: u32,
    pub fps: u32,
    pub start_delay_secs: u64,
    pub end_delay_secs: u64,
    pub suite: Suite,
    /// primitives drawn by each random-shape workload
    pub shape_count: u32,
    pub ui_font_scale: u32,
    pub test_font_scale: u32,
    #[serde(with = "crate::util::custom_serializer::rgb_color")]
    pub foreground: Color,
    #[serde(with = "crate::util::custom_serializer::rgb_color")]
    pub background: Color,
    /// fixed seed for reproducible random workloads
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl PersistedSettings {
    fn load(self) -> Settings {
        let tick_interval = fps_to_tick_interval(self.fps);
        Settings {
            persisted: self,
            tick_interval,
        }
    }
}

impl Default for PersistedSettings {
    fn default() -> Self {
        PersistedSettings {
            display_mode: DisplayMode::default(),
            aspect_ratio: DEFAULT_ASPECT_RATIO,
            scale: DEFAULT_SCALE,
            screen_percentage: DEFAULT_SCREEN_PERCENTAGE,
            fps: DEFAULT_FPS,
            start_delay_secs: DEFAULT_START_DELAY_SECS,
            end_delay_secs: DEFAULT_END_DELAY_SECS,
            suite: Suite::default(),
            shape_count: DEFAULT_SHAPE_COUNT,
            ui_font_scale: DEFAULT_UI_FONT_SCALE,
            test_font_scale: DEFAULT_TEST_FONT_SCALE,
            foreground: WHITE,
            background: BLACK,
            seed: None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Settings {
    pub persisted: PersistedSettings,
    pub tick_interval: Duration,
}

impl Settings {
    pub fn load() -> io::Result<Settings> {
        let path = config_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::read_to_string(path).and_then(|string| {
            Settings::from_toml(&string).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
        })
    }

    pub fn from_toml(string: &str) -> Result<Settings, toml::de::Error> {
        toml::from_str::<PersistedSettings>(string).map(|settings| settings.load())
    }

    pub fn save(&self) -> io::Result<()> {
        let serialized_config =
            toml::to_string(&self.persisted).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(config_path()?, serialized_config)
    }

    /// Frame rate the guard frames and the results screen run at. Never 0.
    pub fn fps(&self) -> u32 {
        self.persisted.fps.max(1)
    }

    pub fn fonts(&self) -> Fonts {
        Fonts {
            ui: Font::new(self.persisted.ui_font_scale),
            test: Font::new(self.persisted.test_font_scale),
        }
    }

    pub fn plan(&self) -> BenchmarkPlan {
        BenchmarkPlan {
            workloads: self.persisted.suite.workloads().to_vec(),
            start_delay: Duration::from_secs(self.persisted.start_delay_secs),
            end_delay: Duration::from_secs(self.persisted.end_delay_secs),
            shape_count: self.persisted.shape_count,
        }
    }

    /// Resolve the display mode into a concrete window. `monitor_size` is the size of the monitor the
    /// window will open on, if the platform can tell us; monitor-relative modes fall back to the
    /// scaled aspect ratio without it.
    pub fn window_layout(&self, monitor_size: Option<PhysicalSize<u32>>) -> WindowLayout {
        let persisted = &self.persisted;
        let (aspect_width, aspect_height) = persisted.aspect_ratio;
        let scaled = PhysicalSize::new(
            aspect_width.saturating_mul(persisted.scale),
            aspect_height.saturating_mul(persisted.scale),
        );

        let layout = match persisted.display_mode {
            DisplayMode::Windowed => WindowLayout {
                size: scaled,
                decorations: true,
                resizable: false,
                fullscreen: false,
            },
            DisplayMode::Fullscreen => WindowLayout {
                size: monitor_size.unwrap_or(scaled),
                decorations: false,
                resizable: false,
                fullscreen: true,
            },
            DisplayMode::Borderless => WindowLayout {
                size: scaled,
                decorations: false,
                resizable: false,
                fullscreen: false,
            },
            DisplayMode::WindowedResizable => WindowLayout {
                size: scaled,
                decorations: true,
                resizable: true,
                fullscreen: false,
            },
            DisplayMode::BorderlessPercentage => WindowLayout {
                size: monitor_size
                    .map(|monitor| {
                        PhysicalSize::new(
                            percent_of(monitor.width, persisted.screen_percentage),
                            percent_of(monitor.height, persisted.screen_percentage),
                        )
                    })
                    .unwrap_or(scaled),
                decorations: false,
                resizable: false,
                fullscreen: false,
            },
        };

        WindowLayout {
            size: PhysicalSize::new(layout.size.width.max(1), layout.size.height.max(1)),
            ..layout
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        PersistedSettings::default().load()
    }
}

fn config_path() -> io::Result<&'static PathBuf> {
    CONFIG_PATH
        .as_ref()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no configuration directory on this platform"))
}
