//! Snapshot tests for CLI components

#[cfg(test)]
mod snapshot_tests {
    use crate::{ReplCommand, parse_command};
    use insta::assert_debug_snapshot;
    use vedic_rag::{Corpus, QueryResponder, VerseRetriever, sample_verses};

    #[test]
    fn test_command_classification_snapshot() {
        let lines = ["q", "help", "", "stats", "courage"];
        let commands: Vec<ReplCommand> = lines.iter().map(|line| parse_command(line)).collect();

        assert_debug_snapshot!(commands, @r###"
        [
            Quit,
            Help,
            Empty,
            Stats,
            Query(
                "courage",
            ),
        ]
        "###);
    }

    #[test]
    fn test_query_lines_reach_the_responder() {
        let corpus = Corpus::from_records(sample_verses());
        let responder = QueryResponder::new(&corpus);

        let ReplCommand::Query(query) = parse_command("  Soul  ") else {
            panic!("expected a query");
        };

        let response = responder.generate_response(&query, 3);
        assert!(response.contains("Based on your query about 'Soul'"));
        assert!(response.contains("**1. Chapter 2, Verse 20**"));
    }
}
