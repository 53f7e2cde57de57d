// Invoice line calculation tests
//
// Properties tested:
// 1. Identical input always yields byte-identical results
// 2. Without discount, net equals the rounded line gross
// 3. A non-zero discount amount always wins over the discount rate
// 4. Zero VAT rate yields zero VAT and gross == net
// 5. Grand total never exceeds gross for withholding rates in 0..=100

use accounting_money::invoices::{InvoiceLineInput, LineCalculator};
use accounting_money::money::{MoneyPolicy, RoundingMode};
use bigdecimal::{num_bigint::BigInt, BigDecimal, Zero};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn amount_text() -> impl Strategy<Value = String> {
    (0u64..10_000_000u64, 0u32..4).prop_map(|(mantissa, scale)| {
        Decimal::new(mantissa as i64, scale).to_string()
    })
}

fn line_input() -> impl Strategy<Value = InvoiceLineInput> {
    (
        amount_text(),
        amount_text(),
        0u8..=100u8,
        proptest::option::of(0u8..=100u8),
        proptest::option::of(amount_text()),
        proptest::option::of(0u8..=100u8),
    )
        .prop_map(|(qty, price, vat, discount_rate, discount_amount, withholding)| {
            InvoiceLineInput {
                qty: Some(qty),
                unit_price: Some(price),
                vat_rate: Decimal::from(vat),
                discount_rate: discount_rate.map(Decimal::from),
                discount_amount,
                withholding_rate: withholding.map(Decimal::from),
            }
        })
}

proptest! {
    #[test]
    fn test_compute_is_deterministic(input in line_input()) {
        let calculator = LineCalculator::default();

        let first = calculator.compute(&input).unwrap();
        let second = calculator.compute(&input).unwrap();

        prop_assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_no_discount_net_equals_line_gross(qty in amount_text(), price in amount_text(), vat in 0u8..=100u8) {
        let input = InvoiceLineInput::new(qty, price, Decimal::from(vat));
        let result = LineCalculator::default().compute(&input).unwrap();

        prop_assert_eq!(result.discount.as_str(), "0.00");
        prop_assert_eq!(result.net, result.line_gross);
    }

    #[test]
    fn test_discount_amount_wins(
        qty in amount_text(),
        price in amount_text(),
        rate in 1u8..=100u8,
        cents in 1i64..1_000_000i64
    ) {
        let amount = Decimal::new(cents, 2).to_string();
        let input = InvoiceLineInput::new(qty, price, dec!(20))
            .with_discount_rate(Decimal::from(rate))
            .with_discount_amount(amount);

        let result = LineCalculator::default().compute(&input).unwrap();
        prop_assert_eq!(result.discount.value(), &BigDecimal::new(BigInt::from(cents), 2));
    }

    #[test]
    fn test_zero_vat_rate(qty in amount_text(), price in amount_text()) {
        let input = InvoiceLineInput::new(qty, price, Decimal::ZERO);
        let result = LineCalculator::default().compute(&input).unwrap();

        prop_assert_eq!(result.vat.as_str(), "0.00");
        prop_assert_eq!(result.gross, result.net);
    }

    #[test]
    fn test_withholding_never_raises_total(input in line_input()) {
        let result = LineCalculator::default().compute(&input).unwrap();

        // With a positive net every figure is non-negative, so withholding only reduces the total
        if result.net.value() > &BigDecimal::zero() {
            prop_assert!(result.grand_total.value() <= result.gross.value());
            prop_assert!(result.withholding.value() <= result.vat.value());
        }
    }
}

#[test]
fn test_scenario_fractional_quantity() {
    let input = InvoiceLineInput::new("10.5", "125.75", dec!(20))
        .with_discount_rate(dec!(0))
        .with_withholding_rate(dec!(0));

    let result = LineCalculator::default().compute(&input).unwrap();

    // 10.5 × 125.75 = 1320.375 rounds away from zero
    assert_eq!(result.line_gross, "1320.38");
    assert_eq!(result.net, "1320.38");
    assert_eq!(result.vat, "264.08");
    // gross is rounded from the exact 1584.450, not summed from rounded parts
    assert_eq!(result.gross, "1584.45");
    assert_eq!(result.grand_total, "1584.45");
}

#[test]
fn test_scenario_withholding_half_of_vat() {
    let input = InvoiceLineInput::new("1", "1000", dec!(20)).with_withholding_rate(dec!(50));

    let result = LineCalculator::default().compute(&input).unwrap();

    assert_eq!(result.vat, "200.00");
    assert_eq!(result.withholding, "100.00");
    assert_eq!(result.gross, "1200.00");
    assert_eq!(result.grand_total, "1100.00");
}

#[test]
fn test_discount_tie_break() {
    let calculator = LineCalculator::default();

    let rate_only = InvoiceLineInput::new("1", "1000", dec!(20))
        .with_discount_rate(dec!(10))
        .with_discount_amount("0");
    assert_eq!(calculator.compute(&rate_only).unwrap().discount, "100.00");

    let amount_wins = InvoiceLineInput::new("1", "1000", dec!(20))
        .with_discount_rate(dec!(10))
        .with_discount_amount("50");
    assert_eq!(calculator.compute(&amount_wins).unwrap().discount, "50.00");

    let blank_amount = InvoiceLineInput::new("1", "1000", dec!(20))
        .with_discount_rate(dec!(10))
        .with_discount_amount("");
    assert_eq!(calculator.compute(&blank_amount).unwrap().discount, "100.00");
}

#[test]
fn test_single_figure_calculations_share_rounding() {
    let calculator = LineCalculator::default();

    assert_eq!(
        calculator.calculate_total(Some("10,5"), Some("125.75"), 2).unwrap(),
        "1320.38"
    );
    assert_eq!(calculator.calculate_vat(Some("1000"), dec!(20), 2).unwrap(), "200.00");
    assert_eq!(
        calculator.calculate_discount_by_rate(Some("1000"), dec!(10), 2).unwrap(),
        "100.00"
    );
    assert_eq!(
        calculator.calculate_withholding(Some("200"), dec!(50), 2).unwrap(),
        "100.00"
    );
    assert_eq!(calculator.calculate_vat(Some("0.625"), dec!(20), 2).unwrap(), "0.13");
    assert_eq!(calculator.calculate_vat(None, dec!(20), 2).unwrap(), "0.00");
}

#[test]
fn test_policies_are_isolated_per_calculator() {
    let backend = LineCalculator::default();
    let bankers = LineCalculator::new(MoneyPolicy::default().with_rounding(RoundingMode::HalfEven));

    let input = InvoiceLineInput::new("1", "0.125", Decimal::ZERO);

    assert_eq!(backend.compute(&input).unwrap().line_gross, "0.13");
    assert_eq!(bankers.compute(&input).unwrap().line_gross, "0.12");
    assert_eq!(backend.compute(&input).unwrap().line_gross, "0.13");
}

#[test]
fn test_sub_unit_products_keep_all_significant_digits() {
    let calculator = LineCalculator::default();

    // 0.0499999999999999999999999999 × 0.1 is just below the half-cent
    let input = InvoiceLineInput::new("0.0499999999999999999999999999", "0.1", Decimal::ZERO);
    assert_eq!(calculator.compute(&input).unwrap().line_gross, "0.00");

    let input = InvoiceLineInput::new("0,05", "0.1", Decimal::ZERO);
    assert_eq!(calculator.compute(&input).unwrap().line_gross, "0.01");

    assert_eq!(
        calculator
            .calculate_withholding(Some("0.0099999999999999999999999999"), dec!(50), 2)
            .unwrap(),
        "0.00"
    );
}

#[test]
fn test_precision_is_configurable_per_calculator() {
    let qty = "123456789012345.6789";
    let price = "98765432109876.54321";

    let standard = LineCalculator::default()
        .calculate_total(Some(qty), Some(price), 4)
        .unwrap();
    let wide = LineCalculator::new(MoneyPolicy::default().with_precision(40))
        .calculate_total(Some(qty), Some(price), 4)
        .unwrap();

    // the exact product has 38 significant digits; 28 of them survive by default
    assert_eq!(standard, "12193263113702179522374638010.0000");
    assert_eq!(wide, "12193263113702179522374638011.1126");
}
