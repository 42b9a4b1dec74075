/// 경유 1 L 연소 시 CO2 배출량 [kg]
pub const CO2_KG_PER_LITER: f64 = 2.68;
/// 나무 한 그루가 1년간 흡수하는 CO2 [kg]
pub const CO2_KG_PER_TREE_YEAR: f64 = 21.77;
/// 플라스틱 병 하나를 만드는 데 배출되는 CO2 [kg]
pub const CO2_KG_PER_PLASTIC_BOTTLE: f64 = 0.082;

/// 연료 절감량의 환경 환산값.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnvironmentalEquivalence {
    pub co2_kg: f64,
    pub tree_years: f64,
    pub plastic_bottles: f64,
}

/// 연간 연료 절감량[L]을 CO2, 나무-년, 플라스틱 병 개수로 환산한다.
///
/// 음수(대상 장비가 더 많이 소모)는 그대로 음수로 돌려준다.
pub fn environmental_equivalence(annual_fuel_savings_liters: f64) -> EnvironmentalEquivalence {
    let co2_kg = annual_fuel_savings_liters * CO2_KG_PER_LITER;
    EnvironmentalEquivalence {
        co2_kg,
        tree_years: co2_kg / CO2_KG_PER_TREE_YEAR,
        plastic_bottles: co2_kg / CO2_KG_PER_PLASTIC_BOTTLE,
    }
}
