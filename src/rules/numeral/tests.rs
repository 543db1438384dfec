use crate::engine::{Assists, Resolver};
use crate::locale::Locale;
use crate::rules::numeral::rules::NumeralResolver;
use crate::{Kind, Token};

fn run(input: &str, tag: &str) -> Vec<Token> {
    let resolver = NumeralResolver::new().unwrap();
    let locale = Locale::lookup(tag).unwrap();
    resolver.parse(input, locale, &Assists::default()).unwrap()
}

fn values(input: &str, tag: &str) -> Vec<f64> {
    run(input, tag).iter().map(|t| t.value.as_f64()).collect()
}

#[test]
fn english_examples_matching() {
    // Array of (expected_values, input_string)
    let cases: Vec<(Vec<f64>, &str)> = vec![
        (vec![1_251_365.0], "one million two hundred fifty one thousand three hundred and sixty five"),
        (vec![50.0, 22.0, 5.0], "fifty cats flew twenty two miles past five dogs"),
        (vec![1_250.0], "twelve hundred fifty"),
        (vec![21.0], "twenty-one"),
        (vec![22.0], "twenty-2"),
        (vec![200_000.0], "two Hundred thousand"),
        (vec![721_012.0], "seven hundred twenty-one thousand twelve"),
        (vec![721_012.0], "seven hundred twenty-one thousand and twelve"),
        (vec![31_256_721.0], "thirty-one million two hundred fifty-six thousand seven hundred twenty-one"),
        (vec![3e9], "three billion"),
        (vec![500_000.0], "half-a-mil"),
        (vec![500_000.0], "half a million"),
        (vec![500_000_000.0], "half-a-bill"),
        (vec![20.0], "a score"),
        (vec![0.25], "a quarter"),
        (vec![0.0], "zero"),
        (vec![-504.0], "-504"),
        (vec![2.5], "2.5"),
        (vec![5_000.0], "5 thousand"),
        (vec![1.0, 30.0], "1hr30min"),
    ];

    for (expected, input) in cases {
        let got = values(input, "en-US");
        assert_eq!(got, expected, "unexpected numbers for input '{input}'");
    }
}

#[test]
fn german_examples_matching() {
    let cases: Vec<(Vec<f64>, &str)> = vec![
        (vec![21.0], "ein und zwanzig"),
        (vec![53.0], "dreiundfünfzig"),
        (vec![200.0], "zweihundert"),
        (vec![1_653_001.0, 370.0], "eine million sechs hundertdreiundfünfzigtausend eins katze und drei hundert siebzig hunde"),
        (vec![2e9], "zwo milliarden"),
        (vec![0.5], "halb"),
    ];

    for (expected, input) in cases {
        let got = values(input, "de-DE");
        assert_eq!(got, expected, "unexpected numbers for input '{input}'");
    }
}

#[test]
fn every_table_word_parses_standalone() {
    for locale in Locale::all() {
        for (word, value) in locale.numbers.words {
            let got = values(word, locale.tag);
            assert_eq!(got, vec![*value], "word '{word}' in {}", locale.tag);
        }
    }
}

#[test]
fn english_words_need_word_boundaries() {
    assert!(values("often", "en-US").is_empty());
    assert!(values("stone", "en-US").is_empty());
    assert!(values("no numbers here", "en-US").is_empty());
}

#[test]
fn number_span_covers_first_to_last_word() {
    let input = "fifty cats flew twenty two miles past five dogs";
    let tokens = run(input, "en-US");

    let spans: Vec<(usize, usize, &str)> = tokens.iter().map(|t| (t.start(), t.end(), t.text.as_str())).collect();
    assert_eq!(spans, vec![(0, 5, "fifty"), (16, 26, "twenty two"), (38, 42, "five")]);
    assert!(tokens.iter().all(|t| t.kind == Kind::Number));
}

#[test]
fn segments_record_their_words() {
    let tokens = run("one million two hundred fifty one thousand three hundred and sixty five", "en-US");
    assert_eq!(tokens.len(), 1);

    let segments: Vec<f64> = tokens[0].children.iter().map(|s| s.value.as_f64()).collect();
    assert_eq!(segments, vec![1e6, 251_000.0, 300.0, 60.0, 5.0]);
    assert!(tokens[0].children.iter().all(|s| s.kind == Kind::NumberSegment));

    let merged = &tokens[0].children[1];
    let words: Vec<&str> = merged.children.iter().map(|w| w.text.as_str()).collect();
    assert_eq!(words, vec!["two", "hundred", "fifty", "one", "thousand"]);
    assert_eq!(merged.text, "two hundred fifty one thousand");
}

#[test]
fn tokens_are_ordered_and_disjoint() {
    let inputs = [
        "3 cats, twenty dogs and one hundred and five birds",
        "ein und zwanzig, 7 und drei",
        "seven 8 nine-10 eleven",
    ];
    for input in inputs {
        for tag in ["en-US", "de-DE"] {
            let tokens = run(input, tag);
            for pair in tokens.windows(2) {
                assert!(pair[0].end() <= pair[1].start(), "overlap in '{input}' ({tag}): {pair:?}");
            }
            for t in &tokens {
                assert_eq!(&input[t.start()..t.end()], t.text);
            }
        }
    }
}

#[test]
fn oversized_products_saturate() {
    let input = format!("one billion 1{} two", "0".repeat(301));
    let tokens = run(&input, "en-US");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].value.as_f64(), f64::MAX);
    assert_eq!(tokens[0].children.len(), 2);
    assert!(!tokens[0].value.to_string().contains("inf"));
}
