use std::sync::Arc;

use arrow::array::{Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;

const COUNTRIES: [&str; 14] = [
    "France", "USA", "Italy", "Spain", "United Kingdom", "Germany", "Japan", "South Korea",
    "Belgium", "Romania", "Mexico", "Argentina", "Iran", "Denmark",
];

const SECTIONS: [&str; 3] = ["Competition", "Un Certain Regard", "Out of Competition"];

const PRODUCERS: [&str; 10] = [
    "Arte France Cinéma", "Why Not Productions", "Les Films du Losange", "Wild Bunch",
    "Rai Cinema", "El Deseo", "BBC Films", "X Filme Creative Pool", "CJ Entertainment",
    "Zentropa",
];

const DIRECTORS: [&str; 8] = [
    "A. Moreau", "B. Rossi", "C. García", "D. Smith", "E. Tanaka", "F. Kim", "G. Müller",
    "H. Popescu",
];

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

    fn below(&mut self, n: usize) -> usize {
        (self.next_u64() % n as u64) as usize
    }

    /// `k` distinct picks from `items`, joined with ", ".
    fn pick_list(&mut self, items: &[&str], k: usize) -> String {
        let mut picked: Vec<&str> = Vec::with_capacity(k);
        while picked.len() < k.min(items.len()) {
            let item = items[self.below(items.len())];
            if !picked.contains(&item) {
                picked.push(item);
            }
        }
        picked.join(", ")
    }
}

fn main() {
    let mut rng = SimpleRng::new(42);

    let mut titles: Vec<String> = Vec::new();
    let mut directors: Vec<String> = Vec::new();
    let mut years: Vec<i64> = Vec::new();
    let mut countries: Vec<Option<String>> = Vec::new();
    let mut sections: Vec<String> = Vec::new();
    let mut producers: Vec<Option<String>> = Vec::new();

    for year in 1990..=2024i64 {
        for n in 0..20 {
            titles.push(format!("Film {year}-{n:02}"));
            directors.push(DIRECTORS[rng.below(DIRECTORS.len())].to_string());
            years.push(year);
            sections.push(SECTIONS[rng.below(SECTIONS.len())].to_string());

            // Roughly one film in twelve has no country data.
            if rng.below(12) == 0 {
                countries.push(None);
                producers.push(None);
                continue;
            }
            let n_countries = 1 + rng.below(3);
            countries.push(Some(rng.pick_list(&COUNTRIES, n_countries)));
            let n_producers = 1 + rng.below(3);
            producers.push(Some(rng.pick_list(&PRODUCERS, n_producers)));
        }
    }

    let schema = Arc::new(Schema::new(vec![
        Field::new("title", DataType::Utf8, false),
        Field::new("director", DataType::Utf8, false),
        Field::new("year", DataType::Int64, false),
        Field::new("countries", DataType::Utf8, true),
        Field::new("section", DataType::Utf8, false),
        Field::new("productoras_normalizadas", DataType::Utf8, true),
    ]));

    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(StringArray::from(titles)),
            Arc::new(StringArray::from(directors)),
            Arc::new(Int64Array::from(years.clone())),
            Arc::new(StringArray::from(countries)),
            Arc::new(StringArray::from(sections)),
            Arc::new(StringArray::from(producers)),
        ],
    )
    .expect("Failed to create RecordBatch");

    // Write Parquet
    let output_path = "sample_festival.parquet";
    let file = std::fs::File::create(output_path).expect("Failed to create output file");
    let mut writer = ArrowWriter::try_new(file, schema, None).expect("Failed to create writer");
    writer.write(&batch).expect("Failed to write batch");
    writer.close().expect("Failed to close writer");

    println!("Wrote {} films to {output_path}", years.len());
}
