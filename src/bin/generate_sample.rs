use std::sync::Arc;

use arrow::array::{Float64Array, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;

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
}

fn main() {
    let mut rng = SimpleRng::new(42);

    let sites = [
        "CCAFS LC-40",
        "CCAFS SLC-40",
        "KSC LC-39A",
        "VAFB SLC-4E",
    ];

    // (category, launches, success probability): later boosters fly more and
    // fail less.
    let boosters: [(&str, usize, f64); 5] = [
        ("v1.0", 5, 0.4),
        ("v1.1", 10, 0.55),
        ("FT", 20, 0.8),
        ("B4", 10, 0.9),
        ("B5", 15, 0.97),
    ];

    let mut all_site: Vec<String> = Vec::new();
    let mut all_payload: Vec<f64> = Vec::new();
    let mut all_booster: Vec<String> = Vec::new();
    let mut all_class: Vec<i64> = Vec::new();

    for &(booster, launches, p_success) in &boosters {
        for _ in 0..launches {
            let site = sites[(rng.next_u64() % sites.len() as u64) as usize];
            // Payload masses cluster low with the occasional heavy flight.
            let payload = (rng.next_f64().powi(2) * 10_000.0 * 100.0).round() / 100.0;
            let class = i64::from(rng.next_f64() < p_success);

            all_site.push(site.to_string());
            all_payload.push(payload);
            all_booster.push(booster.to_string());
            all_class.push(class);
        }
    }
    let n_rows = all_site.len();

    let site_array = StringArray::from(all_site.iter().map(|s| s.as_str()).collect::<Vec<_>>());
    let payload_array = Float64Array::from(all_payload);
    let booster_array =
        StringArray::from(all_booster.iter().map(|s| s.as_str()).collect::<Vec<_>>());
    let class_array = Int64Array::from(all_class);

    let schema = Arc::new(Schema::new(vec![
        Field::new("Launch Site", DataType::Utf8, false),
        Field::new("Payload Mass (kg)", DataType::Float64, false),
        Field::new("Booster Version Category", DataType::Utf8, false),
        Field::new("class", DataType::Int64, false),
    ]));

    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(site_array),
            Arc::new(payload_array),
            Arc::new(booster_array),
            Arc::new(class_array),
        ],
    )
    .expect("Failed to create RecordBatch");

    let output_path = "sample_launches.parquet";
    let file = std::fs::File::create(output_path).expect("Failed to create output file");
    let mut writer = ArrowWriter::try_new(file, schema, None).expect("Failed to create writer");
    writer.write(&batch).expect("Failed to write batch");
    writer.close().expect("Failed to close writer");

    println!("Wrote {n_rows} launch records to {output_path}");
}
