use approx::assert_relative_eq;
use rema_risk::state::{CONTAMINANT_NOT_FOUND, DATA_UNAVAILABLE};
use rema_risk::{
    CalcError, CalculationOutcome, CalculatorConfig, CalculatorState, ExposureForm, ExposureInput, Field,
    Phase, RiskLevel, compute_risk_quotient, estimated_intake, load_reference_table, validate,
};
use rust_xlsxwriter::Workbook;

fn rsl_bytes(rows: &[(&str, f64)]) -> Vec<u8> {
    let mut wb = Workbook::new();
    let sheet = wb.add_worksheet();
    sheet.write_string(0, 4, "RfDo (mg/kg-day)").unwrap();
    sheet.write_string(0, 13, "Analyte").unwrap();
    for (i, (name, rfd)) in rows.iter().enumerate() {
        sheet.write_number(i as u32 + 1, 4, *rfd).unwrap();
        sheet.write_string(i as u32 + 1, 13, *name).unwrap();
    }
    wb.save_to_buffer().unwrap()
}

fn scenario_form(contaminant: &str) -> ExposureForm {
    ExposureForm {
        c: "0.01".into(),
        ir: "2".into(),
        ef: "350".into(),
        ed: "30".into(),
        bw: "70".into(),
        at: "25550".into(),
        contaminant: contaminant.into(),
    }
}

fn run(form: &ExposureForm, rows: &[(&str, f64)]) -> Result<rema_risk::Assessment, CalcError> {
    let cfg = CalculatorConfig::default();
    let table = load_reference_table(&rsl_bytes(rows)).unwrap();
    let input = validate(form, &cfg.limits).unwrap();
    compute_risk_quotient(&input, &table, &cfg)
}

#[test]
fn scenario_low_risk() {
    let a = run(&scenario_form("TCE"), &[("TCE", 0.0005)]).unwrap();

    assert_relative_eq!(a.intake, 0.000117417, max_relative = 1e-5);
    assert_relative_eq!(a.quotient, 0.2348, max_relative = 1e-3);
    assert_eq!(a.display_quotient, 0.235);
    assert_eq!(a.level, RiskLevel::Low);
    assert_eq!(a.level.to_string(), "Low or No Potential Health Risk");
}

#[test]
fn scenario_potential_risk() {
    let a = run(&scenario_form("TCE"), &[("TCE", 0.00005)]).unwrap();

    assert_relative_eq!(a.quotient, 2.348, max_relative = 1e-3);
    assert_eq!(a.level, RiskLevel::Potential);
    assert_eq!(a.level.to_string(), "Potential Health Risk");
}

#[test]
fn scenario_unknown_contaminant() {
    let err = run(&scenario_form("Benzene"), &[("TCE", 0.0005)]).unwrap_err();
    assert_eq!(err, CalcError::ReferenceNotFound("Benzene".into()));
}

#[test]
fn scenario_zero_body_weight() {
    let cfg = CalculatorConfig::default();
    let table = load_reference_table(&rsl_bytes(&[("TCE", 0.0005)])).unwrap();
    let input = ExposureInput {
        concentration: 0.01,
        intake_rate: 2.0,
        exposure_frequency: 350.0,
        exposure_duration: 30.0,
        body_weight: 0.0,
        averaging_time: 25550.0,
        contaminant: "TCE".into(),
    };

    let err = compute_risk_quotient(&input, &table, &cfg).unwrap_err();
    assert_eq!(err.parameter(), Some("bw"));
    assert_eq!(
        estimated_intake(0.01, 2.0, 350.0, 30.0, 0.0, 25550.0).unwrap_err(),
        err
    );
}

#[test]
fn session_from_workbook_bytes() {
    let mut state = CalculatorState::default();
    state.load_table(&rsl_bytes(&[("TCE", 0.0005)])).unwrap();
    assert!(state.is_ready());

    state.form = scenario_form("TCE");
    assert!(matches!(state.calculate(), CalculationOutcome::Succeeded(_)));
    assert_eq!(state.phase, Phase::Succeeded);

    state.update_field(Field::Contaminant, "Benzene");
    state.calculate();
    assert_eq!(state.phase, Phase::Failed);
    assert_eq!(state.global_error.as_deref(), Some(CONTAMINANT_NOT_FOUND));

    state.update_field(Field::At, "0");
    state.update_field(Field::Ir, "-1");
    let CalculationOutcome::Rejected(errors) = state.calculate().clone() else {
        panic!("expected rejection");
    };
    assert_eq!(errors.keys().copied().collect::<Vec<_>>(), vec![Field::Ir, Field::At]);
    assert!(state.global_error.is_none());
}

#[test]
fn failed_load_leaves_session_unavailable() {
    let mut state = CalculatorState::default();
    assert!(state.load_table(b"<html>404</html>").is_err());
    assert_eq!(state.global_error.as_deref(), Some(DATA_UNAVAILABLE));

    state.form = scenario_form("TCE");
    assert_eq!(
        state.calculate(),
        &CalculationOutcome::Failed(CalcError::DataUnavailable)
    );
}

#[test]
fn underflowing_divisors_fail_instead_of_succeeding() {
    let mut state = CalculatorState::default();
    state.load_table(&rsl_bytes(&[("TCE", 0.0005)])).unwrap();
    state.form = scenario_form("TCE");
    state.update_field(Field::Bw, "1e-200");
    state.update_field(Field::At, "1e-200");

    let outcome = state.calculate().clone();
    let CalculationOutcome::Failed(err) = &outcome else {
        panic!("expected failure, got {outcome:?}");
    };
    assert_eq!(err.parameter(), Some("intake"));
    assert_eq!(state.phase, Phase::Failed);
    assert!(state.global_error.is_some());
}
