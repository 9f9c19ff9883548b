use csv::ReaderBuilder;
use freewheel::{avec::FromFields, registry, sans::field::Reading};

#[test]
fn decode_slice_readings() {
    const PATH: &str = "fixtures/readings.csv";

    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .has_headers(false)
        .from_path(PATH)
        .unwrap();

    for record in reader.records() {
        let mut record: Vec<String> = record.unwrap().iter().map(|f| f.to_string()).collect();

        let uuid = record.remove(0);
        let data = hex(&record.remove(0));

        let schema = registry::schema(&uuid).unwrap();
        let mut validator = Validator(record);

        freewheel::avec::decode_slice(schema, &data, &mut validator).unwrap();

        assert!(validator.0.is_empty(), "{uuid}: missing readings {:?}", validator.0);
    }
}

/// Checks readings against the expected `field, raw` pairs of a fixture row.
struct Validator(Vec<String>);

impl FromFields for Validator {
    fn add_reading(&mut self, field: u8, reading: Reading) {
        assert_eq!(self.0.remove(0), field.to_string());
        assert_eq!(self.0.remove(0), reading.raw().to_string());
    }
}

fn hex(s: &str) -> Vec<u8> {
    (0..s.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&s[i..i + 2], 16).unwrap())
        .collect()
}
