// Copyright 2018 The Grin Developers
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Logging wrapper to be used throughout all crates in the workspace.

use std::ops::Deref;
use std::{panic, thread};

use backtrace::Backtrace;
use log::{LevelFilter, Record};
use log4rs::append::console::ConsoleAppender;
use log4rs::append::rolling_file::{
	policy::compound::roll::fixed_window::FixedWindowRoller,
	policy::compound::trigger::size::SizeTrigger, policy::compound::CompoundPolicy,
	RollingFileAppender,
};
use log4rs::append::Append;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use log4rs::filter::{threshold::ThresholdFilter, Filter, Response};

use crate::types::{LogLevel, LoggingConfig};
use crate::Mutex;

fn convert_log_level(in_level: &LogLevel) -> LevelFilter {
	match *in_level {
		LogLevel::Info => LevelFilter::Info,
		LogLevel::Warning => LevelFilter::Warn,
		LogLevel::Debug => LevelFilter::Debug,
		LogLevel::Trace => LevelFilter::Trace,
		LogLevel::Error => LevelFilter::Error,
	}
}

lazy_static::lazy_static! {
	/// Flag to observe whether logging was explicitly initialised (don't output otherwise).
	static ref WAS_INIT: Mutex<bool> = Mutex::new(false);
	static ref LOGGING_CONFIG: Mutex<LoggingConfig> = Mutex::new(LoggingConfig::default());
}

const LOGGING_PATTERN: &str = "{d(%Y%m%d %H:%M:%S%.3f)} {h({l})} {M} - {m}{n}";

/// Rejects messages whose module path isn't part of this workspace, to keep
/// third-party crate chatter out of the configured log sink.
#[derive(Debug)]
struct WorkspaceFilter;

impl Filter for WorkspaceFilter {
	fn filter(&self, record: &Record<'_>) -> Response {
		match record.module_path() {
			Some(path) if path.starts_with("nipopow") => Response::Neutral,
			_ => Response::Reject,
		}
	}
}

/// Initializes the logger with the given configuration. A no-op if called
/// more than once.
pub fn init_logger(config: LoggingConfig) {
	{
		let mut was_init = WAS_INIT.lock();
		if *was_init {
			return;
		}
		*was_init = true;
	}

	*LOGGING_CONFIG.lock() = config.clone();

	let level_stdout = convert_log_level(&config.stdout_log_level);
	let level_file = convert_log_level(&config.file_log_level);
	let level_minimum = level_stdout.max(level_file);

	let mut appenders = vec![];
	let mut root = Root::builder();

	if config.log_to_stdout {
		let stdout = ConsoleAppender::builder()
			.encoder(Box::new(PatternEncoder::new(LOGGING_PATTERN)))
			.build();
		appenders.push(
			Appender::builder()
				.filter(Box::new(ThresholdFilter::new(level_stdout)))
				.filter(Box::new(WorkspaceFilter))
				.build("stdout", Box::new(stdout)),
		);
		root = root.appender("stdout");
	}

	if config.log_to_file {
		let file: Box<dyn Append> = if let Some(size) = config.log_max_size {
			let roller = FixedWindowRoller::builder()
				.build(&format!("{}.{{}}.gz", config.log_file_path), 32)
				.expect("invalid rolling file pattern");
			let policy = CompoundPolicy::new(Box::new(SizeTrigger::new(size)), Box::new(roller));
			Box::new(
				RollingFileAppender::builder()
					.append(config.log_file_append)
					.encoder(Box::new(PatternEncoder::new(LOGGING_PATTERN)))
					.build(&config.log_file_path, Box::new(policy))
					.expect("failed to open log file"),
			)
		} else {
			Box::new(
				log4rs::append::file::FileAppender::builder()
					.append(config.log_file_append)
					.encoder(Box::new(PatternEncoder::new(LOGGING_PATTERN)))
					.build(&config.log_file_path)
					.expect("failed to open log file"),
			)
		};
		appenders.push(
			Appender::builder()
				.filter(Box::new(ThresholdFilter::new(level_file)))
				.filter(Box::new(WorkspaceFilter))
				.build("file", file),
		);
		root = root.appender("file");
	}

	let log_config = Config::builder()
		.appenders(appenders)
		.build(root.build(level_minimum))
		.expect("invalid logging configuration");

	log4rs::init_config(log_config).expect("logger already initialized by another framework");
	install_panic_hook();
}

/// Initializes a minimal stdout-only logger for unit and integration tests.
pub fn init_test_logger() {
	let mut config = LoggingConfig::default();
	config.log_to_file = false;
	config.stdout_log_level = LogLevel::Debug;
	init_logger(config);
}

fn install_panic_hook() {
	panic::set_hook(Box::new(|info| {
		let backtrace = Backtrace::new();
		let thread = thread::current();
		let thread = thread.name().unwrap_or("unnamed");

		let msg = match info.payload().downcast_ref::<&'static str>() {
			Some(s) => (*s).to_string(),
			None => match info.payload().downcast_ref::<String>() {
				Some(s) => s.clone(),
				None => "Box<dyn Any>".to_string(),
			},
		};

		match info.location() {
			Some(location) => {
				log::error!(
					"thread '{}' panicked at '{}': {}:{}\n{:?}",
					thread,
					msg,
					location.file(),
					location.line(),
					backtrace
				);
			}
			None => log::error!("thread '{}' panicked at '{}'\n{:?}", thread, msg, backtrace),
		}
	}));
}

#[allow(dead_code)]
fn current_config() -> LoggingConfig {
	LOGGING_CONFIG.lock().deref().clone()
}
