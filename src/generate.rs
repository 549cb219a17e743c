//! Bridge-word text augmentation.
//!
//! Takes user text, and between every adjacent pair of its words inserts
//! one bridge word from the trained graph when one exists.

use rand::seq::IndexedRandom;
use rand::Rng;
use tracing::debug;

use crate::error::{GraphError, Result};
use crate::graph::WordGraph;
use crate::parser::split_words;

/// Insert a random bridge word between each adjacent pair of words in `text`.
///
/// `text` is split on whitespace only; words are looked up exactly as
/// written (no lowercasing or punctuation stripping). The output joins all
/// words with single spaces, so `n` input words yield between `n` and
/// `2n - 1` output words.
///
/// # Errors
/// `EmptyInput` if `text` contains no words.
pub fn generate_new_text<R: Rng + ?Sized>(
    graph: &WordGraph,
    text: &str,
    rng: &mut R,
) -> Result<String> {
    let words = split_words(text);
    let Some((&last, _)) = words.split_last() else {
        return Err(GraphError::EmptyInput);
    };

    let mut output: Vec<String> = Vec::with_capacity(words.len() * 2);
    let mut inserted = 0usize;

    for pair in words.windows(2) {
        let (word1, word2) = (pair[0], pair[1]);
        output.push(word1.to_owned());

        if !graph.has_vertex(word1) || !graph.has_vertex(word2) {
            continue;
        }
        let bridges: Vec<String> = graph.find_bridge_words(word1, word2).into_iter().collect();
        if let Some(bridge) = bridges.choose(rng) {
            output.push(bridge.clone());
            inserted += 1;
        }
    }
    output.push(last.to_owned());

    debug!(input_words = words.len(), inserted, "generated new text");
    Ok(output.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphBuilder;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn fixture() -> WordGraph {
        GraphBuilder::build(&["the", "dog", "chases", "the", "cat", "the", "cat", "runs"])
    }

    #[test]
    fn test_inserts_bridge() {
        let graph = fixture();
        let mut rng = StdRng::seed_from_u64(0);
        let text = generate_new_text(&graph, "the runs", &mut rng).unwrap();
        assert_eq!(text, "the cat runs");
    }

    #[test]
    fn test_single_word_unchanged() {
        let graph = fixture();
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(generate_new_text(&graph, "  dog ", &mut rng).unwrap(), "dog");
    }

    #[test]
    fn test_empty_input_is_error() {
        let graph = fixture();
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            generate_new_text(&graph, "   ", &mut rng),
            Err(GraphError::EmptyInput)
        ));
    }

    #[test]
    fn test_unknown_words_pass_through() {
        let graph = fixture();
        let mut rng = StdRng::seed_from_u64(0);
        let text = generate_new_text(&graph, "a wild the runs appears", &mut rng).unwrap();
        assert_eq!(text, "a wild the cat runs appears");
    }

    #[test]
    fn test_case_and_punctuation_are_preserved() {
        let graph = fixture();
        let mut rng = StdRng::seed_from_u64(0);
        // "The" and "runs!" are not vertices, so nothing is inserted
        let text = generate_new_text(&graph, "The   runs!", &mut rng).unwrap();
        assert_eq!(text, "The runs!");
    }

    #[test]
    fn test_bridge_choice_covers_every_candidate() {
        let graph = GraphBuilder::build(&["go", "to", "town", "go", "into", "town"]);
        let mut seen = std::collections::HashSet::new();
        for seed in 0..64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let text = generate_new_text(&graph, "go town", &mut rng).unwrap();
            assert!(text == "go to town" || text == "go into town", "got {text}");
            seen.insert(text);
        }
        assert!(seen.contains("go to town"));
        assert!(seen.contains("go into town"));
    }

    #[test]
    fn test_empty_graph_leaves_text() {
        let graph = WordGraph::new();
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            generate_new_text(&graph, "some words here", &mut rng).unwrap(),
            "some words here"
        );
    }
}
