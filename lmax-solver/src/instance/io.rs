use std::fs::File;
use std::io::BufRead;
use std::io::BufReader;
use std::io::BufWriter;
use std::io::Write;
use std::path::Path;

use log::debug;

use super::InstanceData;
use super::InstanceError;
use super::Location;

/// The text formats an [`InstanceData`] can be written in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum InstanceFormat {
    /// The job count on the first line, followed by one `r p d` line per job. This is the format
    /// accepted by [`InstanceData::read`].
    #[default]
    Plain,
    /// Array literals (`nbJobs`, `ri`, `pi` and `ddi`) for data-driven modelling tools.
    Structured,
}

/// The names of the fields on a job line, in order.
const JOB_FIELDS: [&str; 3] = ["r", "p", "d"];

/// The lines of `source` numbered from 1, without their `\n` or `\r\n` ending. A line which is
/// not valid UTF-8 is malformed input; only a failing reader is an IO failure.
fn numbered_lines(
    source: impl BufRead,
) -> impl Iterator<Item = (usize, Result<String, InstanceError>)> {
    source.split(b'\n').enumerate().map(|(index, bytes)| {
        let line_number = index + 1;
        let line = bytes.map_err(InstanceError::from).and_then(|mut bytes| {
            if bytes.last() == Some(&b'\r') {
                let _ = bytes.pop();
            }
            String::from_utf8(bytes).map_err(|error| {
                InstanceError::malformed(
                    Location::Line(line_number),
                    format!("invalid UTF-8 ({error})"),
                )
            })
        });
        (line_number, line)
    })
}

impl InstanceData {
    /// Reads an instance in the plain format: a line with the number of jobs `n`, followed by `n`
    /// lines with the whitespace-separated integers `r p d`. Trailing blank lines are ignored.
    ///
    /// Either the complete instance is read, or an error describes the first problem in the
    /// input.
    pub fn read(source: impl BufRead) -> Result<InstanceData, InstanceError> {
        let mut lines = numbered_lines(source);

        let (count_line, count) = lines.next().ok_or_else(|| {
            InstanceError::malformed(
                Location::Line(1),
                "expected the number of jobs, found the end of the input",
            )
        })?;
        let count = count?;
        let n = count.trim().parse::<i64>().map_err(|_| {
            InstanceError::malformed(
                Location::Line(count_line),
                format!("the number of jobs is not an integer: `{}`", count.trim()),
            )
        })?;
        if n <= 0 {
            return Err(InstanceError::malformed(
                Location::Line(count_line),
                format!("the number of jobs must be positive, found {n}"),
            ));
        }
        let n = usize::try_from(n).map_err(|_| {
            InstanceError::malformed(Location::Line(count_line), "too many jobs")
        })?;

        let mut r = Vec::new();
        let mut p = Vec::new();
        let mut d = Vec::new();

        for job in 0..n {
            let line_number = count_line + 1 + job;
            let Some((_, line)) = lines.next() else {
                return Err(InstanceError::malformed(
                    Location::Line(line_number),
                    format!("expected {n} jobs, found {job}"),
                ));
            };
            let [r_i, p_i, d_i] = parse_job_line(&line?, line_number)?;

            if p_i < 1 {
                return Err(InstanceError::malformed(
                    Location::Line(line_number),
                    format!("field `p` must be at least 1, found {p_i}"),
                ));
            }

            r.push(r_i);
            p.push(p_i);
            d.push(d_i);
        }

        for (line_number, line) in lines {
            if !line?.trim().is_empty() {
                return Err(InstanceError::malformed(
                    Location::Line(line_number),
                    format!("expected the end of the input after {n} jobs"),
                ));
            }
        }

        debug!("Read an instance with {n} jobs");
        InstanceData::from_validated_jobs(r, p, d)
    }

    /// Reads an instance in the plain format from the file at `path`.
    pub fn read_from_path(path: impl AsRef<Path>) -> Result<InstanceData, InstanceError> {
        let file = File::open(path)?;
        InstanceData::read(BufReader::new(file))
    }

    /// Writes the instance to `sink` in the given format.
    pub fn write(&self, sink: &mut impl Write, format: InstanceFormat) -> Result<(), InstanceError> {
        match format {
            InstanceFormat::Plain => {
                writeln!(sink, "{}", self.n())?;
                for ((r, p), d) in self.r.iter().zip(&self.p).zip(&self.d) {
                    writeln!(sink, "{r} {p} {d}")?;
                }
            }
            InstanceFormat::Structured => {
                writeln!(sink, "nbJobs = {};", self.n())?;
                writeln!(sink, "ri = [ {} ];", join(&self.r))?;
                writeln!(sink, "pi = [ {} ];", join(&self.p))?;
                writeln!(sink, "ddi = [ {} ];", join(&self.d))?;
            }
        }

        sink.flush()?;
        Ok(())
    }

    /// Writes the instance in the given format to the file at `path`, replacing its contents.
    pub fn write_to_path(
        &self,
        path: impl AsRef<Path>,
        format: InstanceFormat,
    ) -> Result<(), InstanceError> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.write(&mut writer, format)
    }
}

fn parse_job_line(line: &str, line_number: usize) -> Result<[i32; 3], InstanceError> {
    let tokens = line.split_whitespace().collect::<Vec<_>>();
    if tokens.len() != JOB_FIELDS.len() {
        return Err(InstanceError::malformed(
            Location::Line(line_number),
            format!(
                "expected {} fields (r p d), found {}",
                JOB_FIELDS.len(),
                tokens.len()
            ),
        ));
    }

    let mut values = [0; 3];
    for ((value, token), field) in values.iter_mut().zip(&tokens).zip(JOB_FIELDS) {
        *value = token.parse::<i32>().map_err(|_| {
            InstanceError::malformed(
                Location::Line(line_number),
                format!("field `{field}` is not an integer: `{token}`"),
            )
        })?;
    }

    Ok(values)
}

fn join(values: &[i32]) -> String {
    values
        .iter()
        .map(|value| value.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
