use loan_compare::{
    LoanError, LoanScenario, RepaymentFrequency, ScenarioInput, best_available_rate,
    compute_repayment, compute_savings,
};
use rstest::rstest;
use rust_decimal_macros::dec;

fn loan(principal: f64, rate: f64, years: u32, frequency: RepaymentFrequency) -> LoanScenario {
    LoanScenario {
        principal,
        annual_rate_percent: rate,
        term_years: years,
        frequency,
    }
}

#[rstest]
#[case(500_000.0, 6.5, 30, 3160.34)]
#[case(300_000.0, 3.25, 30, 1305.62)]
fn test_known_monthly_repayments(
    #[case] principal: f64,
    #[case] rate: f64,
    #[case] years: u32,
    #[case] expected: f64,
) {
    let result = compute_repayment(&loan(principal, rate, years, RepaymentFrequency::Monthly)).unwrap();
    assert!(
        (result.periodic_repayment - expected).abs() < 1e-2,
        "got {}",
        result.periodic_repayment
    );
}

#[test]
fn test_zero_rate_repayment_is_exact() {
    let result = compute_repayment(&loan(120_000.0, 0.0, 10, RepaymentFrequency::Monthly)).unwrap();
    assert_eq!(result.periodic_repayment, 1000.0);
    assert_eq!(result.summary().periodic_repayment, dec!(1000.00));
}

#[rstest]
fn test_zero_rate_divides_by_total_periods(
    #[values(RepaymentFrequency::Weekly, RepaymentFrequency::Fortnightly, RepaymentFrequency::Monthly)]
    frequency: RepaymentFrequency,
    #[values(1, 7, 40)] years: u32,
) {
    let principal = 345_678.9;
    let result = compute_repayment(&loan(principal, 0.0, years, frequency)).unwrap();
    let periods = f64::from(years * frequency.periods_per_year());
    assert_eq!(result.periodic_repayment, principal / periods);
}

#[rstest]
fn test_total_interest_identity(
    #[values(RepaymentFrequency::Weekly, RepaymentFrequency::Fortnightly, RepaymentFrequency::Monthly)]
    frequency: RepaymentFrequency,
    #[values(0.0, 3.0, 6.5, 9.99)] rate: f64,
) {
    let scenario = loan(750_000.0, rate, 25, frequency);
    let result = compute_repayment(&scenario).unwrap();
    assert_eq!(result.total_interest, result.total_repayment - scenario.principal);
    assert_eq!(
        result.total_repayment,
        result.periodic_repayment * f64::from(result.total_periods)
    );
}

#[rstest]
fn test_repayment_rises_with_rate(
    #[values(RepaymentFrequency::Weekly, RepaymentFrequency::Fortnightly, RepaymentFrequency::Monthly)]
    frequency: RepaymentFrequency,
) {
    let payments: Vec<f64> = (0..=40)
        .map(|step| f64::from(step) * 0.25)
        .map(|rate| {
            compute_repayment(&loan(400_000.0, rate, 30, frequency))
                .unwrap()
                .periodic_repayment
        })
        .collect();
    assert!(payments.windows(2).all(|w| w[1] > w[0]));
}

#[test]
fn test_repayment_rises_from_zero_through_tiny_rates() {
    let rates = [0.0, 1e-15, 1e-12, 1e-9, 1e-8, 0.01];
    for frequency in RepaymentFrequency::ALL {
        for principal in [1.0, 120_000.0, 500_000.0, 2_000_000.0] {
            for years in [1, 5, 30, 40] {
                let payments: Vec<f64> = rates
                    .iter()
                    .map(|&rate| {
                        compute_repayment(&loan(principal, rate, years, frequency))
                            .unwrap()
                            .periodic_repayment
                    })
                    .collect();
                assert!(payments.iter().all(|p| p.is_finite()), "{payments:?}");
                // 1e-15 is below f64 resolution, so only require it not to drop.
                assert!(payments[1] >= payments[0], "{payments:?}");
                assert!(payments[1..].windows(2).all(|w| w[1] > w[0]), "{payments:?}");
            }
        }
    }
}

#[rstest]
#[case(0.0)]
#[case(5.5)]
#[case(8.25)]
fn test_doubling_principal_doubles_everything(#[case] rate: f64) {
    let single = compute_repayment(&loan(250_000.0, rate, 20, RepaymentFrequency::Fortnightly)).unwrap();
    let double = compute_repayment(&loan(500_000.0, rate, 20, RepaymentFrequency::Fortnightly)).unwrap();
    assert_eq!(double.periodic_repayment, single.periodic_repayment * 2.0);
    assert_eq!(double.total_repayment, single.total_repayment * 2.0);
    assert_eq!(double.total_interest, single.total_interest * 2.0);

    let bigger = compute_repayment(&loan(250_001.0, rate, 20, RepaymentFrequency::Fortnightly)).unwrap();
    assert!(bigger.periodic_repayment > single.periodic_repayment);
}

#[rstest]
fn test_self_comparison_saves_nothing(
    #[values(RepaymentFrequency::Weekly, RepaymentFrequency::Monthly)] frequency: RepaymentFrequency,
    #[values(0.0, 4.2, 6.5)] rate: f64,
) {
    let scenario = loan(640_000.0, rate, 30, frequency);
    let result = compute_savings(&scenario, scenario.annual_rate_percent).unwrap();
    assert_eq!(result.periodic_savings, 0.0);
    assert_eq!(result.annual_savings, 0.0);
    assert_eq!(result.lifetime_savings, 0.0);
}

#[test]
fn test_weekly_savings_scale_by_periods() {
    let scenario = loan(500_000.0, 6.5, 30, RepaymentFrequency::Weekly);
    let result = compute_savings(&scenario, 5.75).unwrap();
    assert_eq!(result.annual_savings, result.periodic_savings * 52.0);
    assert_eq!(result.lifetime_savings, result.periodic_savings * 1560.0);
}

#[rstest]
#[case(0.0, 6.5, 30.0, "monthly")]
#[case(500_000.0, 6.5, 0.0, "monthly")]
#[case(500_000.0, -1.0, 30.0, "monthly")]
#[case(500_000.0, 6.5, 30.0, "daily")]
fn test_invalid_scenarios_fail(
    #[case] principal: f64,
    #[case] rate: f64,
    #[case] term: f64,
    #[case] frequency: &str,
) {
    let input = ScenarioInput {
        principal,
        annual_rate_percent: rate,
        term_years: term,
        frequency: frequency.to_string(),
    };
    let result = LoanScenario::try_from(input).and_then(|s| compute_repayment(&s));
    assert!(matches!(result, Err(LoanError::InvalidScenario { .. })));
}

#[rstest]
#[case(loan(0.0, 6.5, 30, RepaymentFrequency::Monthly))]
#[case(loan(500_000.0, 6.5, 0, RepaymentFrequency::Monthly))]
#[case(loan(500_000.0, -1.0, 30, RepaymentFrequency::Monthly))]
fn test_invalid_raw_scenarios_fail(#[case] scenario: LoanScenario) {
    assert!(compute_repayment(&scenario).unwrap_err().is_invalid_scenario());
    assert!(compute_savings(&scenario, 5.0).unwrap_err().is_invalid_scenario());
}

#[test]
fn test_best_available_rate_examples() {
    assert_eq!(best_available_rate(6.5, 0.75, 3.0).unwrap(), 5.75);
    assert_eq!(best_available_rate(3.2, 0.75, 3.0).unwrap(), 3.0);
}
