//! Helpers shared by the integration tests.
#![allow(
    dead_code,
    reason = "is used in integration tests but unable to find a way to silence these warnings"
)]

use std::fs::File;
use std::path::Path;
use std::path::PathBuf;
use std::process::Command;
use std::process::ExitStatus;
use std::process::Stdio;
use std::time::Duration;

use itertools::Itertools;
use lmax_solver::instance::InstanceData;
use lmax_solver::model::Schedule;
use wait_timeout::ChildExt;

/// The captured result of running the binary.
#[derive(Debug)]
pub(crate) struct Run {
    pub(crate) status: ExitStatus,
    pub(crate) stdout: String,
}

/// A path in the scratch directory of the integration tests.
pub(crate) fn scratch_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join(name)
}

/// Writes `contents` to a fresh scratch file and returns its path.
pub(crate) fn write_scratch_file(name: &str, contents: &str) -> PathBuf {
    let path = scratch_path(name);
    std::fs::write(&path, contents).expect("Failed to write the scratch file.");
    path
}

/// Runs the binary with `args`; stdout is captured through a log file next to `log_name`.
pub(crate) fn run_solver(args: &[&str], log_name: &str) -> Run {
    const TEST_TIMEOUT: Duration = Duration::from_secs(60);

    let solver = PathBuf::from(env!("CARGO_BIN_EXE_lmax-solver"));
    let log_file_path = scratch_path(&format!("{log_name}.log"));

    let mut child = Command::new(solver)
        .args(args)
        .stdout(File::create(&log_file_path).expect("Failed to create the log file."))
        .stderr(Stdio::null())
        .stdin(Stdio::null())
        .spawn()
        .expect("Failed to run solver.");

    let status = match child.wait_timeout(TEST_TIMEOUT) {
        Ok(Some(status)) => status,
        Ok(None) => panic!("solver took more than {} seconds", TEST_TIMEOUT.as_secs()),
        Err(e) => panic!("error starting solver: {e}"),
    };

    let stdout = std::fs::read_to_string(&log_file_path).expect("Failed to read the log file.");
    std::fs::remove_file(&log_file_path).expect("Failed to remove the log file.");

    Run { status, stdout }
}

/// The smallest maximum lateness over all job orders, scheduling every job as early as possible.
pub(crate) fn brute_force_lmax(instance: &InstanceData) -> i32 {
    (0..instance.n())
        .permutations(instance.n())
        .map(|order| {
            let mut time = i32::MIN;
            order
                .into_iter()
                .map(|job| {
                    time = time.max(r(instance, job)) + p(instance, job);
                    time - d(instance, job)
                })
                .max()
                .expect("instances have at least one job")
        })
        .min()
        .expect("there is at least one order")
}

/// Asserts that `schedule` is a feasible schedule of `instance` with the reported `Lmax`.
pub(crate) fn assert_valid_schedule(instance: &InstanceData, schedule: &Schedule) {
    assert_eq!(schedule.jobs.len(), instance.n());

    for scheduled in &schedule.jobs {
        let job = scheduled.job;
        assert!(scheduled.start >= r(instance, job), "job {job} starts before its release");
        assert_eq!(scheduled.end - scheduled.start, p(instance, job));
        assert_eq!(scheduled.lateness, scheduled.end - d(instance, job));
    }

    for (first, second) in schedule.jobs.iter().tuple_windows() {
        assert!(
            first.end <= second.start,
            "jobs {} and {} overlap",
            first.job,
            second.job
        );
    }

    let lmax = schedule
        .jobs
        .iter()
        .map(|scheduled| scheduled.lateness)
        .max()
        .expect("instances have at least one job");
    assert_eq!(schedule.lmax, lmax);
}

fn r(instance: &InstanceData, job: usize) -> i32 {
    instance.r(job).expect("job index in range")
}

fn p(instance: &InstanceData, job: usize) -> i32 {
    instance.p(job).expect("job index in range")
}

fn d(instance: &InstanceData, job: usize) -> i32 {
    instance.d(job).expect("job index in range")
}

pub(crate) fn path_arg(path: &Path) -> String {
    path.display().to_string()
}
