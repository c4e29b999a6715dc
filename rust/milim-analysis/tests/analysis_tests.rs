//! End-to-end tests running whole analysis pipelines, from JSON
//! configuration to token streams.

use milim_analysis::filters::{LengthFilter, LowercaseFilter, StopFilter};
use milim_analysis::tokenizers::{KeywordTokenizer, StandardTokenizer};
use milim_analysis::{
    AnalyzerParams, TextAnalyzer, Token, TokenStream, build_analyzer, validate_params,
};

fn texts(tokens: &[Token]) -> Vec<&str> {
    tokens.iter().map(|t| t.text.as_str()).collect()
}

#[test]
fn test_cursor_protocol_over_full_pipeline() {
    let analyzer = build_analyzer(r#"{"type": "english"}"#).unwrap();
    let source = "The quick brown foxes jumped";
    let mut stream = analyzer.token_stream(source);

    let mut seen = Vec::new();
    while stream.advance() {
        // The borrowed accessor and the owned snapshot must agree.
        let text = stream.token_text().to_string();
        let detail = stream.token_detail();
        assert_eq!(detail.text, text);
        // Offsets point into the source text, on char boundaries.
        assert!(detail.end_offset <= source.len());
        assert!(source.is_char_boundary(detail.start_offset));
        assert!(source.is_char_boundary(detail.end_offset));
        seen.push(detail);
    }
    // Exhaustion is sticky even after the pipeline is done.
    assert!(!stream.advance());
    assert!(!stream.advance());

    assert_eq!(texts(&seen), ["quick", "brown", "fox", "jump"]);
    // "The" was dropped, its position stays vacant.
    let positions: Vec<usize> = seen.iter().map(|t| t.position).collect();
    assert_eq!(positions, [1, 2, 3, 4]);
}

#[test]
fn test_offsets_recover_source_slices() {
    let analyzer = TextAnalyzer::standard();
    let source = "Grün ist die Heide";
    for token in analyzer.analyze(source) {
        // Lowercasing rewrites the text but never the offsets.
        let slice = &source[token.byte_range()];
        assert_eq!(token.text, slice.to_lowercase());
    }
}

#[test]
fn test_json_pipeline_matches_hand_built_pipeline() {
    let from_json = build_analyzer(
        r#"{
            "tokenizer": "standard",
            "filter": [
                "lowercase",
                {"type": "stop", "stop_words": ["the", "a"]},
                {"type": "length", "min": 2}
            ]
        }"#,
    )
    .unwrap();
    let by_hand = TextAnalyzer::builder(StandardTokenizer::new())
        .filter(LowercaseFilter::new())
        .filter(StopFilter::new(["the", "a"]))
        .filter(LengthFilter::new(2, None).unwrap())
        .build();

    let source = "The I in a Team";
    assert_eq!(from_json.analyze(source), by_hand.analyze(source));
}

#[test]
fn test_ngram_pipeline_from_json() {
    let analyzer = build_analyzer(
        r#"{
            "tokenizer": {"type": "ngram", "min_gram": 2, "max_gram": 2},
            "filter": ["lowercase"]
        }"#,
    )
    .unwrap();
    let tokens = analyzer.analyze("AbCd");
    assert_eq!(texts(&tokens), ["ab", "bc", "cd"]);
    assert_eq!(tokens[0].byte_range(), 0..2);
    assert_eq!(tokens[2].byte_range(), 2..4);
}

#[test]
fn test_synonym_pipeline_expands_at_same_position() {
    let analyzer = build_analyzer(
        r#"{
            "tokenizer": "standard",
            "filter": [
                "lowercase",
                {"type": "synonym", "synonyms": {"ny": ["new york"]}}
            ]
        }"#,
    )
    .unwrap();
    let tokens = analyzer.analyze("NY weather");
    assert_eq!(texts(&tokens), ["ny", "new york", "weather"]);
    assert_eq!(tokens[0].position, 0);
    assert_eq!(tokens[1].position, 0);
    assert_eq!(tokens[1].position_length, 2);
    assert_eq!(tokens[2].position, 1);
    // The injected token inherits the offsets of the original.
    assert_eq!(tokens[1].byte_range(), tokens[0].byte_range());
}

#[test]
fn test_keyword_tokenizer_with_filters() {
    let analyzer = TextAnalyzer::builder(KeywordTokenizer::new())
        .filter(LowercaseFilter::new())
        .build();
    let tokens = analyzer.analyze("Alpha Beta");
    assert_eq!(texts(&tokens), ["alpha beta"]);
    assert_eq!(tokens[0].byte_range(), 0..10);

    let analyzer = TextAnalyzer::builder(KeywordTokenizer::new())
        .filter(LengthFilter::max_bytes(4))
        .build();
    assert!(analyzer.analyze("too long to keep").is_empty());
}

#[test]
fn test_empty_input_yields_empty_stream_everywhere() {
    for params in [
        r#"{}"#,
        r#"{"type": "english"}"#,
        r#"{"tokenizer": "keyword"}"#,
        r#"{"tokenizer": {"type": "ngram", "min_gram": 1, "max_gram": 2}}"#,
    ] {
        let analyzer = build_analyzer(params).unwrap();
        assert!(analyzer.analyze("").is_empty(), "params: {params}");
        let mut stream = analyzer.token_stream("");
        assert!(!stream.advance());
        assert!(!stream.advance());
    }
}

#[test]
fn test_validate_agrees_with_build() {
    let cases = [
        r#"{}"#,
        r#"{"type": "standard"}"#,
        r#"{"type": "english"}"#,
        r#"{"type": "martian"}"#,
        r#"{"tokenizer": "whitespace", "filter": ["lowercase", "alpha_num"]}"#,
        r#"{"tokenizer": "ngram"}"#,
        r#"{"tokenizer": {"type": "regex", "pattern": "("}}"#,
        r#"{"filter": [{"type": "stemmer", "language": "russian"}]}"#,
        r#"{"filter": [{"type": "stop"}]}"#,
        r#"{"tokenizer": {"type": "ngram", "min_gram": 1, "max_gram": 2, "bogus": true}}"#,
        "not json at all",
    ];
    for case in cases {
        assert_eq!(
            validate_params(case).is_ok(),
            build_analyzer(case).is_ok(),
            "case: {case}"
        );
    }
}

#[test]
fn test_analyzer_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>(_: &T) {}
    let analyzer = TextAnalyzer::english();
    assert_send_sync(&analyzer);

    std::thread::scope(|scope| {
        let analyzer = &analyzer;
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(move || analyzer.analyze("The running cats")))
            .collect();
        let mut results: Vec<Vec<Token>> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        let first = results.pop().unwrap();
        assert!(results.iter().all(|r| *r == first));
        assert_eq!(texts(&first), ["run", "cat"]);
    });
}

#[test]
fn test_random_text_keeps_stream_invariants() {
    let mut rng = fastrand::Rng::with_seed(0x5eed_7043);
    let alphabet = [
        "red", "GREEN", "Blue", "caf\u{e9}", "x1", "...", "the", "\u{8d70}",
    ];
    for _ in 0..200 {
        let mut source = String::new();
        for _ in 0..rng.usize(0..12) {
            source.push_str(alphabet[rng.usize(..alphabet.len())]);
            source.push(if rng.bool() { ' ' } else { '\t' });
        }

        let analyzer = TextAnalyzer::standard();
        let mut stream = analyzer.token_stream(&source);
        let mut previous_position = None;
        let mut previous_start = 0;
        while stream.advance() {
            let token = stream.token_detail();
            assert!(token.start_offset <= token.end_offset);
            assert!(token.end_offset <= source.len());
            assert!(source.is_char_boundary(token.start_offset));
            assert!(source.is_char_boundary(token.end_offset));
            assert!(token.start_offset >= previous_start);
            assert!(!token.text.is_empty());
            assert_eq!(token.position_length, 1);
            // Positions are consecutive when no filter drops tokens.
            match previous_position {
                None => assert_eq!(token.position, 0),
                Some(previous) => assert_eq!(token.position, previous + 1),
            }
            previous_position = Some(token.position);
            previous_start = token.start_offset;
        }
        assert!(!stream.advance());

        // Without filters the token text is the literal source slice.
        let bare = TextAnalyzer::builder(StandardTokenizer::new()).build();
        for token in bare.analyze(&source) {
            assert_eq!(token.text, &source[token.byte_range()]);
        }
    }
}

#[test]
fn test_params_survive_reserialization() {
    let original = r#"{
        "tokenizer": {"type": "ngram", "min_gram": 1, "max_gram": 3, "prefix_only": true},
        "filter": ["lowercase", {"type": "synonym", "synonyms": {"db": ["database"]}}]
    }"#;
    let params = AnalyzerParams::from_json(original).unwrap();
    let json = serde_json::to_string(&params).unwrap();
    let reparsed = AnalyzerParams::from_json(&json).unwrap();

    let source = "DBx";
    assert_eq!(
        params.build().unwrap().analyze(source),
        reparsed.build().unwrap().analyze(source)
    );
}
