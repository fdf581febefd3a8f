use serde::Serialize;

/// One row of the synthetic dataset, with the full column set of the real
/// climate/agriculture table (the viewer ignores the extra columns).
#[derive(Serialize)]
struct Row {
    #[serde(rename = "Year")]
    year: i32,
    #[serde(rename = "Country")]
    country: &'static str,
    #[serde(rename = "Region")]
    region: &'static str,
    #[serde(rename = "Crop_Type")]
    crop_type: &'static str,
    #[serde(rename = "Average_Temperature_C")]
    temperature_c: f64,
    #[serde(rename = "Total_Precipitation_mm")]
    precipitation_mm: f64,
    #[serde(rename = "CO2_Emissions_MT")]
    co2_emissions_mt: Option<f64>,
    #[serde(rename = "Crop_Yield_MT_per_HA")]
    yield_mt_per_ha: f64,
    #[serde(rename = "Extreme_Weather_Events")]
    extreme_weather_events: u32,
    #[serde(rename = "Irrigation_Access_%")]
    irrigation_pct: Option<f64>,
    #[serde(rename = "Pesticide_Use_KG_per_HA")]
    pesticide_kg_per_ha: f64,
    #[serde(rename = "Fertilizer_Use_KG_per_HA")]
    fertilizer_kg_per_ha: f64,
    #[serde(rename = "Soil_Health_Index")]
    soil_health_index: f64,
    #[serde(rename = "Adaptation_Strategies")]
    adaptation_strategy: &'static str,
    #[serde(rename = "Economic_Impact_Million_USD")]
    economic_impact_musd: f64,
}

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64()
    }

    /// True with probability `p`.
    fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[(self.next_u64() % items.len() as u64) as usize]
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

fn main() {
    let mut rng = SimpleRng::new(42);

    // (country, regions, base precipitation mm)
    let countries: [(&str, &[&str], f64); 5] = [
        ("India", &["West Bengal", "Punjab", "Maharashtra", "Tamil Nadu"], 1400.0),
        ("USA", &["Midwest", "California", "Texas", "South"], 900.0),
        ("China", &["North", "Central", "South", "East"], 1100.0),
        ("Brazil", &["North", "Northeast", "South", "Southeast"], 1700.0),
        ("Australia", &["Queensland", "New South Wales", "Victoria"], 600.0),
    ];
    // (crop, base yield MT/HA)
    let crops = [("Corn", 2.4), ("Wheat", 2.0), ("Rice", 2.7), ("Soybeans", 1.8)];
    let strategies = ["Water Management", "Drought-resistant Crops", "Crop Rotation", "Organic Farming", "No Adaptation"];

    let output_path = "crops.csv";
    let mut writer = csv::Writer::from_path(output_path).expect("Failed to create output file");

    let mut rows = 0usize;
    for year in 1990..=2024 {
        for &(country, regions, base_rain) in &countries {
            for &(crop, base_yield) in &crops {
                // a few observations per country/crop/year, spread over regions
                for _ in 0..3 {
                    let region = *rng.pick(regions);

                    let precipitation_mm = if rng.chance(0.01) {
                        rng.uniform(3000.0, 4500.0)
                    } else {
                        (base_rain + rng.gauss(0.0, 450.0)).clamp(200.0, 2990.0)
                    };
                    let irrigation = rng.uniform(10.0, 99.0);
                    let co2 = if rng.chance(0.005) {
                        rng.uniform(60.0, 120.0)
                    } else {
                        rng.uniform(0.5, 30.0)
                    };
                    let trend = (year - 1990) as f64 * 0.01;
                    let yield_mt = (base_yield
                        + trend
                        + irrigation * 0.008
                        - (precipitation_mm - 1200.0).abs() * 0.0004
                        + rng.gauss(0.0, 0.35))
                    .max(0.3);

                    writer
                        .serialize(Row {
                            year,
                            country,
                            region,
                            crop_type: crop,
                            temperature_c: round2(rng.uniform(-5.0, 35.0)),
                            precipitation_mm: round2(precipitation_mm),
                            co2_emissions_mt: (!rng.chance(0.05)).then(|| round2(co2)),
                            yield_mt_per_ha: round2(yield_mt),
                            extreme_weather_events: (rng.next_u64() % 10) as u32,
                            irrigation_pct: (!rng.chance(0.05)).then(|| round2(irrigation)),
                            pesticide_kg_per_ha: round2(rng.uniform(0.0, 50.0)),
                            fertilizer_kg_per_ha: round2(rng.uniform(0.0, 100.0)),
                            soil_health_index: round2(rng.uniform(30.0, 100.0)),
                            adaptation_strategy: *rng.pick(&strategies),
                            economic_impact_musd: round2(yield_mt * rng.uniform(150.0, 450.0)),
                        })
                        .expect("Failed to write row");
                    rows += 1;
                }
            }
        }
    }
    writer.flush().expect("Failed to flush writer");

    println!("Wrote {rows} rows to {output_path}");
}
