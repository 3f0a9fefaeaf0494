//! End-to-end label rendering against real template files.

use godex_label::config::{Config, TEMPLATE_FILE_NAME};
use godex_label::label::{render, Arguments, TemplateError};

use std::fs;

use chrono::NaiveDate;
use tempfile::TempDir;

/// A label as it is found in the field, with LF line endings.
const FULL_TEMPLATE: &str = "\
^Q50,3
^W80
^L
AC,33,20,1,1,0,0E,{DEVICE_NAME} {STORAGE} {COLOR}
AC,33,52,1,1,0,0E,Model: {MODEL_NUMBER} iOS {IOS_VERSION}
AC,33,84,1,1,0,0E,iCloud: {ICLOUD_STATE} FMI: {FMI_STATE}
AC,33,116,1,1,0,0E,SIM: {SIM_STATE} MDM: {MDM_STATE}
AC,33,148,1,1,0,0E,Battery: {BATTERY} Port: {PORT}
AC,33,180,1,1,0,0E,IMEI: {IMEI}
AC,33,212,1,1,0,0E,Date: {DATE}
AC,33,478,1,1,0,0E,Notes :
AC,33,510,1,1,0,0E,{MESSAGES}
E
";

fn config_with_template(template: &str) -> (TempDir, Config) {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(TEMPLATE_FILE_NAME), template).unwrap();

    let today = NaiveDate::from_ymd_opt(2024, 11, 3).unwrap();
    let config = Config::new(dir.path(), today);

    (dir, config)
}

#[test]
fn two_line_template() {
    let (_dir, config) = config_with_template("Device: {DEVICE_NAME}\r\nNotes :");
    let args = Arguments::parse([
        "--devicename=iPhone13",
        r#"--issues=["Cracked screen","No charger"]"#,
    ]);

    let document = render(&config, &args).unwrap();

    assert_eq!(
        document.as_str(),
        "Device: iPhone13\r\nNotes :\r\nAC,33,510,1,1,0,0E,Cracked screen, No charger"
    );
}

#[test]
fn full_label() {
    let (_dir, config) = config_with_template(FULL_TEMPLATE);
    let args = Arguments::parse([
        "/usr/local/bin/godex-label",
        "--DeviceName=iPhone 13 Pro",
        "--storage=256GB",
        "--color=Graphite",
        "--modelNumber=A2638",
        "--iosversion=17.1",
        "--icloudstate=Off",
        "--fmistate=Off",
        "--simstate=Unlocked",
        "--mdmstate=None",
        "--battery=89%",
        "--port=3",
        "--imei=356789101112131",
        "--issues=[Face ID, Rear camera, Speaker]",
    ]);

    let document = render(&config, &args).unwrap();
    let lines: Vec<_> = document.lines().collect();

    assert_eq!(
        lines,
        [
            "^Q50,3",
            "^W80",
            "^L",
            "AC,33,20,1,1,0,0E,iPhone 13 Pro 256GB Graphite",
            "AC,33,52,1,1,0,0E,Model: A2638 iOS 17.1",
            "AC,33,84,1,1,0,0E,iCloud: Off FMI: Off",
            "AC,33,116,1,1,0,0E,SIM: Unlocked MDM: None",
            "AC,33,148,1,1,0,0E,Battery: 89% Port: 3",
            "AC,33,180,1,1,0,0E,IMEI: 356789101112131",
            "AC,33,212,1,1,0,0E,Date: 03/11/2024",
            "AC,33,478,1,1,0,0E,Notes :",
            "AC,33,510,1,1,0,0E,Face ID, Rear camera",
            "AC,33,542,1,1,0,0E,Speaker",
            "E",
        ]
    );
}

#[test]
fn empty_arguments_blank_the_label() {
    let (_dir, config) = config_with_template(FULL_TEMPLATE);

    let document = render(&config, &Arguments::default()).unwrap();

    assert!(!document.as_str().contains('{'));
    assert!(document.as_str().contains("Date: 03/11/2024"));
    assert!(document.as_str().contains("AC,33,180,1,1,0,0E,IMEI: \r\n"));
    assert!(!document.as_str().contains("AC,33,510"));
}

#[test]
fn template_is_read_on_every_render() {
    let (dir, config) = config_with_template("A {COLOR}");
    let args = Arguments::parse(["--color=Blue"]);

    assert_eq!(render(&config, &args).unwrap().as_str(), "A Blue");

    fs::write(dir.path().join(TEMPLATE_FILE_NAME), "B {COLOR}").unwrap();
    assert_eq!(render(&config, &args).unwrap().as_str(), "B Blue");
}

#[test]
fn non_utf8_template_still_renders() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(TEMPLATE_FILE_NAME), b"Temp 25\xB0C {COLOR}\r\nE\r\n").unwrap();
    let config = Config::new(dir.path(), NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());

    let document = render(&config, &Arguments::parse(["--color=Red"])).unwrap();

    assert_eq!(document.as_str(), "Temp 25\u{fffd}C Red\r\nE");
}

#[test]
fn missing_template_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::new(dir.path(), NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());

    let err = render(&config, &Arguments::default()).unwrap_err();

    assert!(matches!(err, TemplateError::NotFound(ref path) if *path == config.template_path()));
    assert!(err.to_string().starts_with("Label template file not found"));
}
