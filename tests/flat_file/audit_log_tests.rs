//! Integration tests for the flat-file audit log.

use super::helpers::{DataDir, FixedClock, alice, bob, data_dir};
use rstest::rstest;
use tasktrack::task::{
    domain::{AuditEntry, TaskCode, TaskStatus, today},
    ports::AuditLog,
};

#[rstest]
fn append_writes_iso_dated_rows_in_order(data_dir: DataDir) -> eyre::Result<()> {
    let log = data_dir.audit_log();
    let clock = FixedClock;

    log.append(&AuditEntry::record(
        TaskCode::new(10),
        &alice(),
        TaskStatus::NotStarted,
        &clock,
    ))?;
    log.append(&AuditEntry::record(
        TaskCode::new(10),
        &bob(),
        TaskStatus::InProgress,
        &clock,
    ))?;

    let date = today(&clock).format("%Y-%m-%d").to_string();
    eyre::ensure!(
        data_dir.read("logs.csv")
            == format!(
                "Task_Code,Change_User_Code,Status,Change_Date\n10,1,0,{date}\n10,2,1,{date}\n"
            )
    );
    Ok(())
}

#[rstest]
fn append_keeps_existing_rows_intact(data_dir: DataDir) -> eyre::Result<()> {
    data_dir.write(
        "logs.csv",
        "Task_Code,Change_User_Code,Status,Change_Date\n3,1,0,2023-01-02",
    );
    let date = chrono::NaiveDate::from_ymd_opt(2024, 2, 29)
        .ok_or_else(|| eyre::eyre!("valid date"))?;

    data_dir.audit_log().append(&AuditEntry::new(
        TaskCode::new(3),
        alice().code(),
        TaskStatus::InProgress,
        date,
    ))?;

    eyre::ensure!(
        data_dir.read("logs.csv")
            == "Task_Code,Change_User_Code,Status,Change_Date\n\
                3,1,0,2023-01-02\n\
                3,1,1,2024-02-29\n"
    );
    Ok(())
}
