// src/fields.rs
//
// The ordered field catalogue shared by forward navigation and bulk
// paste-import. The order below is a public contract: "next field" and the
// paste fill order both come from it, so reordering entries is a breaking
// change for both consumers.

use crate::models::ModelInputs;

/// How a raw token becomes a stored value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coercion {
    /// Free-text currency amount: stored as typed, minus thousands commas.
    CurrencyText,
    /// Percent entry: stored verbatim as text.
    PercentText,
    /// Numeric entry: parsed to f64, zero on failure.
    Number,
}

/// Target array and index inside `ModelInputs`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Sales(usize),
    SalesGrowth(usize),
    MaterialCost(usize),
    ProjMaterialCost(usize),
    ManufacturingCost(usize),
    ProjManufacturingCost(usize),
    ProjSgaCost(usize),
    OperatingProfit(usize),
    OtherIncome(usize),
    ProjOtherIncomePercent(usize),
    Interest(usize),
    ProjInterestPercent(usize),
    Depreciation(usize),
    ProjDepreciationPercent(usize),
    Tax(usize),
    ProjTax(usize),
    DebtorDays(usize),
    InventoryDays(usize),
    PayableDays(usize),
    Capex(usize),
    ProjCapexPercent(usize),
}

#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub key: &'static str,
    pub slot: Slot,
    pub coercion: Coercion,
}

const fn f(key: &'static str, slot: Slot, coercion: Coercion) -> FieldSpec {
    FieldSpec { key, slot, coercion }
}

use Coercion::{CurrencyText, Number, PercentText};

/// Every input field, in navigation order. 90 entries.
pub static FIELD_ORDER: &[FieldSpec] = &[
    f("sales-0", Slot::Sales(0), CurrencyText),
    f("sales-1", Slot::Sales(1), CurrencyText),
    f("sales-2", Slot::Sales(2), CurrencyText),
    f("sales-3", Slot::Sales(3), CurrencyText),
    f("salesGrowth-0", Slot::SalesGrowth(0), Number),
    f("salesGrowth-1", Slot::SalesGrowth(1), Number),
    f("salesGrowth-2", Slot::SalesGrowth(2), Number),
    f("salesGrowth-3", Slot::SalesGrowth(3), Number),
    f("salesGrowth-4", Slot::SalesGrowth(4), Number),
    f("materialCost-0", Slot::MaterialCost(0), PercentText),
    f("materialCost-1", Slot::MaterialCost(1), PercentText),
    f("materialCost-2", Slot::MaterialCost(2), PercentText),
    f("materialCost-3", Slot::MaterialCost(3), PercentText),
    f("projMaterialCost-0", Slot::ProjMaterialCost(0), PercentText),
    f("projMaterialCost-1", Slot::ProjMaterialCost(1), PercentText),
    f("projMaterialCost-2", Slot::ProjMaterialCost(2), PercentText),
    f("projMaterialCost-3", Slot::ProjMaterialCost(3), PercentText),
    f("projMaterialCost-4", Slot::ProjMaterialCost(4), PercentText),
    f("manufacturingCost-0", Slot::ManufacturingCost(0), PercentText),
    f("manufacturingCost-1", Slot::ManufacturingCost(1), PercentText),
    f("manufacturingCost-2", Slot::ManufacturingCost(2), PercentText),
    f("manufacturingCost-3", Slot::ManufacturingCost(3), PercentText),
    f("projManufacturingCost-0", Slot::ProjManufacturingCost(0), PercentText),
    f("projManufacturingCost-1", Slot::ProjManufacturingCost(1), PercentText),
    f("projManufacturingCost-2", Slot::ProjManufacturingCost(2), PercentText),
    f("projManufacturingCost-3", Slot::ProjManufacturingCost(3), PercentText),
    f("projManufacturingCost-4", Slot::ProjManufacturingCost(4), PercentText),
    f("projSGACost-0", Slot::ProjSgaCost(0), PercentText),
    f("projSGACost-1", Slot::ProjSgaCost(1), PercentText),
    f("projSGACost-2", Slot::ProjSgaCost(2), PercentText),
    f("projSGACost-3", Slot::ProjSgaCost(3), PercentText),
    f("projSGACost-4", Slot::ProjSgaCost(4), PercentText),
    f("operatingProfit-0", Slot::OperatingProfit(0), CurrencyText),
    f("operatingProfit-1", Slot::OperatingProfit(1), CurrencyText),
    f("operatingProfit-2", Slot::OperatingProfit(2), CurrencyText),
    f("operatingProfit-3", Slot::OperatingProfit(3), CurrencyText),
    f("otherIncome-0", Slot::OtherIncome(0), Number),
    f("otherIncome-1", Slot::OtherIncome(1), Number),
    f("otherIncome-2", Slot::OtherIncome(2), Number),
    f("otherIncome-3", Slot::OtherIncome(3), Number),
    f("projOtherIncomePercent-0", Slot::ProjOtherIncomePercent(0), PercentText),
    f("projOtherIncomePercent-1", Slot::ProjOtherIncomePercent(1), PercentText),
    f("projOtherIncomePercent-2", Slot::ProjOtherIncomePercent(2), PercentText),
    f("projOtherIncomePercent-3", Slot::ProjOtherIncomePercent(3), PercentText),
    f("projOtherIncomePercent-4", Slot::ProjOtherIncomePercent(4), PercentText),
    f("interest-0", Slot::Interest(0), Number),
    f("interest-1", Slot::Interest(1), Number),
    f("interest-2", Slot::Interest(2), Number),
    f("interest-3", Slot::Interest(3), Number),
    f("projInterestPercent-0", Slot::ProjInterestPercent(0), PercentText),
    f("projInterestPercent-1", Slot::ProjInterestPercent(1), PercentText),
    f("projInterestPercent-2", Slot::ProjInterestPercent(2), PercentText),
    f("projInterestPercent-3", Slot::ProjInterestPercent(3), PercentText),
    f("projInterestPercent-4", Slot::ProjInterestPercent(4), PercentText),
    f("depreciation-0", Slot::Depreciation(0), Number),
    f("depreciation-1", Slot::Depreciation(1), Number),
    f("depreciation-2", Slot::Depreciation(2), Number),
    f("depreciation-3", Slot::Depreciation(3), Number),
    f("projDepreciationPercent-0", Slot::ProjDepreciationPercent(0), PercentText),
    f("projDepreciationPercent-1", Slot::ProjDepreciationPercent(1), PercentText),
    f("projDepreciationPercent-2", Slot::ProjDepreciationPercent(2), PercentText),
    f("projDepreciationPercent-3", Slot::ProjDepreciationPercent(3), PercentText),
    f("projDepreciationPercent-4", Slot::ProjDepreciationPercent(4), PercentText),
    f("tax-0", Slot::Tax(0), PercentText),
    f("tax-1", Slot::Tax(1), PercentText),
    f("tax-2", Slot::Tax(2), PercentText),
    f("tax-3", Slot::Tax(3), PercentText),
    f("projTax-0", Slot::ProjTax(0), PercentText),
    f("projTax-1", Slot::ProjTax(1), PercentText),
    f("projTax-2", Slot::ProjTax(2), PercentText),
    f("projTax-3", Slot::ProjTax(3), PercentText),
    f("projTax-4", Slot::ProjTax(4), PercentText),
    f("debtorDays-0", Slot::DebtorDays(0), Number),
    f("debtorDays-1", Slot::DebtorDays(1), Number),
    f("debtorDays-2", Slot::DebtorDays(2), Number),
    f("inventoryDays-0", Slot::InventoryDays(0), Number),
    f("inventoryDays-1", Slot::InventoryDays(1), Number),
    f("inventoryDays-2", Slot::InventoryDays(2), Number),
    f("payableDays-0", Slot::PayableDays(0), Number),
    f("payableDays-1", Slot::PayableDays(1), Number),
    f("payableDays-2", Slot::PayableDays(2), Number),
    f("capex-0", Slot::Capex(0), Number),
    f("capex-1", Slot::Capex(1), Number),
    f("capex-2", Slot::Capex(2), Number),
    f("capex-3", Slot::Capex(3), Number),
    f("projCapexPercent-0", Slot::ProjCapexPercent(0), PercentText),
    f("projCapexPercent-1", Slot::ProjCapexPercent(1), PercentText),
    f("projCapexPercent-2", Slot::ProjCapexPercent(2), PercentText),
    f("projCapexPercent-3", Slot::ProjCapexPercent(3), PercentText),
    f("projCapexPercent-4", Slot::ProjCapexPercent(4), PercentText),
];

/// Index of a key in the catalogue.
pub fn position(key: &str) -> Option<usize> {
    FIELD_ORDER.iter().position(|spec| spec.key == key)
}

pub fn spec(key: &str) -> Option<&'static FieldSpec> {
    FIELD_ORDER.iter().find(|spec| spec.key == key)
}

/// The field reached by confirming (Enter) from `key`; None past the end.
pub fn next_field(key: &str) -> Option<&'static str> {
    let idx = position(key)?;
    FIELD_ORDER.get(idx + 1).map(|spec| spec.key)
}

/// Numeric coercion with the engine-wide zero fallback.
pub fn parse_or_zero(raw: &str) -> f64 {
    raw.trim().parse::<f64>().unwrap_or(0.0)
}

impl FieldSpec {
    /// Write one raw token into its slot, applying this field's coercion.
    pub fn apply(&self, inputs: &mut ModelInputs, raw: &str) {
        let h = &mut inputs.historical;
        let p = &mut inputs.projections;
        match self.slot {
            Slot::Sales(i) => h.sales[i] = self.coerce_text(raw),
            Slot::SalesGrowth(i) => p.sales_growth[i] = coerce_number(raw),
            Slot::MaterialCost(i) => h.material_cost[i] = self.coerce_text(raw),
            Slot::ProjMaterialCost(i) => p.material_cost[i] = self.coerce_text(raw),
            Slot::ManufacturingCost(i) => h.manufacturing_cost[i] = self.coerce_text(raw),
            Slot::ProjManufacturingCost(i) => p.manufacturing_cost[i] = self.coerce_text(raw),
            Slot::ProjSgaCost(i) => p.sga_cost[i] = self.coerce_text(raw),
            Slot::OperatingProfit(i) => h.operating_profit[i] = self.coerce_text(raw),
            Slot::OtherIncome(i) => h.other_income[i] = coerce_number(raw),
            Slot::ProjOtherIncomePercent(i) => p.other_income_percent[i] = self.coerce_text(raw),
            Slot::Interest(i) => h.interest[i] = coerce_number(raw),
            Slot::ProjInterestPercent(i) => p.interest_percent[i] = self.coerce_text(raw),
            Slot::Depreciation(i) => h.depreciation[i] = coerce_number(raw),
            Slot::ProjDepreciationPercent(i) => p.depreciation_percent[i] = self.coerce_text(raw),
            Slot::Tax(i) => h.tax[i] = self.coerce_text(raw),
            Slot::ProjTax(i) => p.tax[i] = self.coerce_text(raw),
            Slot::DebtorDays(i) => h.debtor_days[i] = coerce_number(raw),
            Slot::InventoryDays(i) => h.inventory_days[i] = coerce_number(raw),
            Slot::PayableDays(i) => h.payable_days[i] = coerce_number(raw),
            Slot::Capex(i) => h.capex[i] = coerce_number(raw),
            Slot::ProjCapexPercent(i) => p.capex_percent[i] = self.coerce_text(raw),
        }
    }

    fn coerce_text(&self, raw: &str) -> String {
        match self.coercion {
            // Currency entries can arrive with thousands separators.
            Coercion::CurrencyText => raw.replace(',', ""),
            _ => raw.to_string(),
        }
    }
}

fn coerce_number(raw: &str) -> f64 {
    parse_or_zero(&raw.replace(',', ""))
}
