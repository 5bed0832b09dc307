//! Status reporter: probe credentials, build the record, print one line.

use std::io::{self, Write};

use serde::Serialize;
use serde_json::ser::Formatter;
use tracing::{debug, info, info_span};

use crate::domain::{Backend, EnvBackends, RunId, StatusRecord};
use crate::error::RunnerError;
use crate::ports::{EnvSource, ProcessEnv};

/// Builds and emits the runner's status record.
///
/// # 使用例
/// ```ignore
/// let reporter = StatusReporter::new(FixedEnv::new().with("OPENAI_API_KEY", "abc"));
/// let mut out = Vec::new();
/// reporter.emit(&mut out)?;
/// ```
#[derive(Debug, Clone)]
pub struct StatusReporter<E> {
    env: E,
    run_id: RunId,
}

impl<E: EnvSource> StatusReporter<E> {
    pub fn new(env: E) -> Self {
        Self {
            env,
            run_id: RunId::generate(),
        }
    }

    pub fn run_id(&self) -> RunId {
        self.run_id
    }

    /// One presence lookup per catalog backend.
    ///
    /// Only presence is logged, never the value.
    pub fn probe(&self) -> EnvBackends {
        Backend::ALL
            .into_iter()
            .map(|backend| {
                let present = self.env.is_present(backend.env_var());
                debug!(credential = %backend, present, "probed backend credential");
                (backend, present)
            })
            .collect()
    }

    pub fn build(&self) -> StatusRecord {
        StatusRecord::stub(self.probe())
    }

    /// JSON line of a freshly built record, without trailing newline.
    pub fn render(&self) -> Result<String, RunnerError> {
        to_line(&self.build())
    }

    /// Writes the record as a single `\n`-terminated line and flushes.
    pub fn emit<W: Write>(&self, out: &mut W) -> Result<StatusRecord, RunnerError> {
        let span = info_span!("runner", run_id = %self.run_id);
        let _enter = span.enter();

        let record = self.build();
        let line = to_line(&record)?;
        writeln!(out, "{line}")?;
        out.flush()?;

        info!(
            status = ?record.status(),
            present = record.env_backends().count_present(),
            "status record emitted"
        );
        Ok(record)
    }
}

/// Single-line JSON with `", "` and `": "` separators.
struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        writer.write_all(b": ")
    }
}

/// Serializes a record into the line printed on stdout.
pub(crate) fn to_line(record: &StatusRecord) -> Result<String, RunnerError> {
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, SpacedFormatter);
    record.serialize(&mut ser)?;
    Ok(String::from_utf8(buf)?)
}

/// Reports the real process environment to stdout.
pub fn report_to_stdout() -> Result<StatusRecord, RunnerError> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    StatusReporter::new(ProcessEnv).emit(&mut out)
}
