use crate::{
    config::Config,
    log::{log_level::LogLevel, log_msg::LogMsg, logger_handle::LoggerHandle},
};

use std::{
    fs::{self, OpenOptions},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
    sync::mpsc::{self, RecvTimeoutError, TrySendError},
    thread,
    time::{Duration, SystemTime, UNIX_EPOCH},
};

// -----------------------------------------------------------------------------
// COMPILE-TIME CONFIGURATION
// -----------------------------------------------------------------------------

/// Flush every 100 lines when debugging/tracing (per-datagram output).
#[cfg(feature = "log-debug")]
const FLUSH_BATCH_SIZE: u32 = 100;

/// Flush every 1000 lines otherwise.
#[cfg(not(feature = "log-debug"))]
const FLUSH_BATCH_SIZE: u32 = 1_000;

/// Idle period after which buffered lines are flushed anyway.
const IDLE_FLUSH: Duration = Duration::from_millis(250);

// -----------------------------------------------------------------------------

/// Bounded, non-blocking logger that writes to a per-process log file.
///
/// # Architecture
///
/// 1. **Producers**: the session and binaries log through cloned [`LoggerHandle`]s.
/// 2. **Queue**: a bounded `mpsc` channel buffers messages; overflow is dropped.
/// 3. **Consumer**: a `logger-worker` thread appends to the file, flushing in
///    batches, on idle, and after every warn/error line.
/// 4. **Console echo**: warn/error lines are also written to stderr so an
///    operator watching the terminal sees rejected batches.
pub struct Logger {
    handle: LoggerHandle,
    thread: Option<thread::JoinHandle<()>>,
    file_path: PathBuf,
}

impl Logger {
    /// Starts the logger for the sensor client, reading `[Logging] client_log_*`.
    #[must_use]
    pub fn start_client(cap: usize, config: &Config) -> Self {
        Self::start("client_log_filename", "client_log_path", "sensor_client", cap, config)
    }

    /// Starts the logger for the sensor server, reading `[Logging] server_log_*`.
    #[must_use]
    pub fn start_server(cap: usize, config: &Config) -> Self {
        Self::start("server_log_filename", "server_log_path", "sensor_server", cap, config)
    }

    fn start(
        fn_key: &str,
        path_key: &str,
        default_name: &str,
        cap: usize,
        config: &Config,
    ) -> Self {
        let app_name = config
            .get_non_empty("Logging", fn_key)
            .unwrap_or(default_name);

        if let Some(dir_str) = config.get_non_empty("Logging", path_key) {
            Self::start_in_dir(expand_path(dir_str), Some(app_name), cap)
        } else {
            Self::start_default(Some(app_name), cap)
        }
    }

    /// Starts the logger in a `logs/` directory next to the executable.
    ///
    /// # Example Filename
    /// `target/debug/logs/sensor_server-20251102_023045-pid1234.log`
    #[must_use]
    pub fn start_default(app_name: Option<&str>, cap: usize) -> Self {
        let base = exe_dir_fallback_cwd().join("logs");
        Self::start_in_dir(base, app_name, cap)
    }

    /// Starts the logger in `dir`, creating it if missing.
    ///
    /// The file name is `<app_name>-<YYYYMMDD_HHMMSS>-pid<PID>.log`. If the file
    /// cannot be opened the worker falls back to a temp file, then to
    /// `io::sink()`; it never panics.
    pub fn start_in_dir<D: AsRef<Path>>(dir: D, app_name: Option<&str>, cap: usize) -> Self {
        let dir = dir.as_ref().to_path_buf();
        let _ = fs::create_dir_all(&dir);

        let ts = timestamp_for_filename();
        let pid = std::process::id();

        let fname = if let Some(name) = app_name {
            format!("{}-{}-pid{}.log", name, ts, pid)
        } else {
            format!("{}-pid{}.log", ts, pid)
        };

        let file_path = dir.join(&fname);

        let (tx, rx) = mpsc::sync_channel::<LogMsg>(cap.max(1));
        let file_path_clone = file_path.clone();

        let thread = thread::Builder::new()
            .name("logger-worker".into())
            .spawn(move || {
                let writer: Box<dyn Write + Send> = if let Ok(f) = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(&file_path_clone)
                {
                    Box::new(f)
                } else {
                    let fallback = std::env::temp_dir().join("sensorstats-fallback.log");
                    match OpenOptions::new().create(true).append(true).open(&fallback) {
                        Ok(f) => Box::new(f),
                        Err(_) => Box::new(io::sink()),
                    }
                };

                let mut out: BufWriter<Box<dyn Write + Send>> = BufWriter::new(writer);
                let mut lines_written: u32 = 0;

                loop {
                    match rx.recv_timeout(IDLE_FLUSH) {
                        Ok(m) => {
                            let _ = writeln!(
                                &mut out,
                                "[{:?}] {} {} | {}",
                                m.level, m.ts_ms, m.target, m.text
                            );
                            lines_written = lines_written.wrapping_add(1);

                            if m.level.is_alert() {
                                eprintln!("[{:?}] {}", m.level, m.text);
                                let _ = out.flush();
                            } else if lines_written.is_multiple_of(FLUSH_BATCH_SIZE) {
                                let _ = out.flush();
                            }
                        }
                        Err(RecvTimeoutError::Timeout) => {
                            let _ = out.flush();
                        }
                        Err(RecvTimeoutError::Disconnected) => break,
                    }
                }

                let _ = out.flush();
            })
            .ok();

        Self {
            handle: LoggerHandle { tx },
            thread,
            file_path,
        }
    }

    /// Enqueues a line without blocking; see [`LoggerHandle::try_log`].
    ///
    /// # Errors
    /// Returns the rejected message when the queue is full or the worker is gone.
    pub fn try_log<S: Into<String>>(
        &self,
        level: LogLevel,
        text: S,
        target: &'static str,
    ) -> Result<(), TrySendError<LogMsg>> {
        self.handle.try_log(level, text, target)
    }

    /// Returns a cloneable handle to hand to the session.
    #[must_use]
    pub fn handle(&self) -> LoggerHandle {
        self.handle.clone()
    }

    /// Path of the active log file.
    #[must_use]
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Closes the queue and waits for the worker to flush.
    ///
    /// Only returns once every [`LoggerHandle`] clone has been dropped, so
    /// callers must release the handles they gave out first.
    pub fn shutdown(self) {
        let Self { handle, thread, .. } = self;
        drop(handle);
        if let Some(t) = thread {
            let _ = t.join();
        }
    }
}

/// Directory of the running executable, or the current directory on error.
fn exe_dir_fallback_cwd() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

/// `YYYYMMDD_HHMMSS` in UTC, e.g. `20251102_023045`.
fn timestamp_for_filename() -> String {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    unix_to_utc(secs).map_or_else(
        |_| format!("unix_{secs}"),
        |tm| {
            format!(
                "{:04}{:02}{:02}_{:02}{:02}{:02}",
                tm.year, tm.mon, tm.day, tm.hour, tm.min, tm.sec
            )
        },
    )
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct SimpleUtc {
    year: i32,
    mon: u32,
    day: u32,
    hour: u32,
    min: u32,
    sec: u32,
}

#[derive(Debug)]
enum UtcConvError {
    Year,
    Month,
    Day,
}

/// UNIX seconds to a Gregorian UTC date (days-from-civil inverse).
///
/// # Errors
///
/// Fails only if a component does not fit its integer type.
#[allow(clippy::many_single_char_names)]
fn unix_to_utc(mut s: u64) -> Result<SimpleUtc, UtcConvError> {
    let sec = (s % 60) as u32;
    s /= 60;
    let min = (s % 60) as u32;
    s /= 60;
    let hour = (s % 24) as u32;
    s /= 24;

    let z: i128 = i128::from(s) + 719_468;

    let era = (if z >= 0 { z } else { z - 146_096 }) / 146_097;
    let doe = z - era * 146_097; // [0, 146096]
    let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
    let y = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100); // [0, 365]
    let mp = (5 * doy + 2) / 153; // [0, 11]
    let d = doy - (153 * mp + 2) / 5 + 1; // [1, 31]
    let m = mp + if mp < 10 { 3 } else { -9 }; // [1, 12]

    let year_i = y + i128::from(m <= 2);

    let year = i32::try_from(year_i).map_err(|_| UtcConvError::Year)?;
    let mon = u32::try_from(m).map_err(|_| UtcConvError::Month)?;
    let day = u32::try_from(d).map_err(|_| UtcConvError::Day)?;

    Ok(SimpleUtc {
        year,
        mon,
        day,
        hour,
        min,
        sec,
    })
}

/// Expands a leading `~` to the user's home directory.
fn expand_path(path_str: &str) -> PathBuf {
    if let Some(rest) = path_str.strip_prefix('~') {
        let home = std::env::var("HOME")
            .or_else(|_| std::env::var("USERPROFILE"))
            .ok()
            .map(PathBuf::from);

        if let Some(mut home_path) = home {
            if rest.is_empty() {
                return home_path;
            }
            if let Some(tail) = rest.strip_prefix('/').or_else(|| rest.strip_prefix('\\')) {
                home_path.push(tail);
                return home_path;
            }
        }
    }
    PathBuf::from(path_str)
}
