// Minimal test harness for the Czech affix engine
// Run with: cargo run --bin stem_test
// src/bin/stem_test.rs
use stemmer_core::Stemmer;

const AFF: &str = "\
SET UTF-8

SFX A Y 3
SFX A ti 0 ti
SFX A l t l
SFX A la t la

SFX N Y 4
SFX N y 0 [^aeiou]y
SFX N u 0 [^aeiou]u
SFX N em 0 em
SFX N si es si

PFX P Y 1
PFX P nej 0 nej
";

const DIC: &str = "\
4
d\u{11b}lat/A
hrad/N
pes/N
slovo
";

fn main() {
    let stemmer = match Stemmer::from_raw(AFF, DIC) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("sample data failed to load: {}", e);
            return;
        }
    };

    let test_cases = [
        "d\u{11b}lati", "d\u{11b}lal", "d\u{11b}lala", "d\u{11b}lat",
        "hrady", "hradu", "hradem", "hrad",
        "psi", "pes",
        "slovo", "xyzzy", "",
    ];
    for word in test_cases.iter() {
        let stem = stemmer.stem(word);
        println!("{} => {}", word, stem);
    }
}
