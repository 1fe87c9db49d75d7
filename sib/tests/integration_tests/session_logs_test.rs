// tests/integration_tests/session_logs_test.rs
use crate::common::{create_config_file, create_test_file, session_log, setup_test_directory};
use anyhow::Result;
use sib::{
    ClassesToTarget, Config, RiskZone, SafeBunks, analyze, classify, load_config,
    scan_session_logs, tally,
};

#[test]
fn test_scan_finds_visible_logs_in_subject_order() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let logs = scan_session_logs(&temp_dir.path().to_path_buf(), &Config::default())?;

    let subjects: Vec<&str> = logs.iter().map(|log| log.subject.as_str()).collect();
    assert_eq!(subjects, vec!["Chemistry", "Mathematics", "Physics"]);
    Ok(())
}

#[test]
fn test_tallies_feed_the_policy() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let logs = scan_session_logs(&temp_dir.path().to_path_buf(), &Config::default())?;

    let mut results = Vec::new();
    for log in &logs {
        let counts = tally(&log.sessions)?;
        let state = counts.into_state(log.min_percentage.unwrap_or(75.0))?;
        results.push((
            log.subject.as_str(),
            counts.held,
            counts.attended,
            state.analyze(),
            classify(&state, 10.0)?,
        ));
    }

    let (_, held, attended, chemistry, zone) = &results[0];
    assert_eq!((*held, *attended), (4, 1));
    assert_eq!(chemistry.current_percentage, 25.0);
    assert_eq!(chemistry.classes_to_target, ClassesToTarget::Reachable(8));
    assert_eq!(*zone, RiskZone::Danger);

    let (_, held, attended, maths, zone) = &results[1];
    assert_eq!((*held, *attended), (4, 3));
    assert_eq!(maths.current_percentage, 75.0);
    assert!(maths.is_safe);
    assert_eq!(maths.safe_bunks, SafeBunks::Limited(0));
    assert_eq!(*zone, RiskZone::Warning);

    let (_, held, attended, physics, zone) = &results[2];
    assert_eq!((*held, *attended), (5, 4));
    assert_eq!(*physics, analyze(5, 4, 60.0)?);
    assert_eq!(physics.safe_bunks, SafeBunks::Limited(1));
    assert_eq!(*zone, RiskZone::Safe);

    Ok(())
}

#[test]
fn test_duplicate_session_is_rejected() -> Result<()> {
    let temp_dir = tempfile::TempDir::new()?;
    let mut yaml = session_log("Biology", None, &["PRESENT", "ABSENT"]);
    yaml.push_str("  - date: 2024-08-01T00:00:00\n    start_time: '10:00'\n    end_time: '11:00'\n    status: PRESENT\n");
    create_test_file(temp_dir.path(), "biology.yaml", &yaml)?;

    let logs = scan_session_logs(&temp_dir.path().to_path_buf(), &Config::default())?;
    let error = tally(&logs[0].sessions).unwrap_err();
    assert!(error.to_string().contains("2024-08-01"));
    assert!(error.to_string().contains("more than once"));
    Ok(())
}

#[test]
fn test_config_excludes_directories_and_changes_glob() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    create_config_file(temp_dir.path(), &["exclude = [\"lab\"]"])?;

    let config = load_config(temp_dir.path())?;
    let logs = scan_session_logs(&temp_dir.path().to_path_buf(), &config)?;
    let subjects: Vec<&str> = logs.iter().map(|log| log.subject.as_str()).collect();
    assert_eq!(subjects, vec!["Mathematics", "Physics"]);

    create_config_file(temp_dir.path(), &["log_glob = \"phys*.yaml\""])?;
    let config = load_config(temp_dir.path())?;
    let logs = scan_session_logs(&temp_dir.path().to_path_buf(), &config)?;
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].subject, "Physics");
    Ok(())
}

#[test]
fn test_malformed_log_names_the_file() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    create_test_file(temp_dir.path(), "broken.yaml", "subject: [unclosed\n")?;

    let error = scan_session_logs(&temp_dir.path().to_path_buf(), &Config::default())
        .unwrap_err();
    assert!(format!("{error:#}").contains("broken.yaml"));
    Ok(())
}
