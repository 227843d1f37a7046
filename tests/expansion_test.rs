use async_trait::async_trait;
use costar::graph::{GraphStore, MovieId, PersonId};
use costar::provider::{CastMember, Credit, CreditProvider, ProviderResult};
use costar::{Expander, ExpansionConfig};
use std::collections::HashMap;
use std::fs;

/// Deterministic in-memory provider: two qualifying credits for the seed,
/// three billed co-actors per movie, one co-actor with a credit of their
/// own. Mirrors the contract of the real client: rating filter and
/// exclusion-before-limit applied provider-side.
struct FixtureProvider {
    credits: HashMap<&'static str, Vec<Credit>>,
    cast: HashMap<&'static str, Vec<CastMember>>,
}

fn credit(id: &str, title: &str, vote_avg: f64) -> Credit {
    Credit {
        id: MovieId::new(id),
        title: title.to_string(),
        vote_avg,
    }
}

fn member(id: &str, name: &str, order: u32) -> CastMember {
    CastMember {
        id: PersonId::new(id),
        name: name.to_string(),
        character: None,
        credit_id: None,
        order,
    }
}

impl FixtureProvider {
    fn new() -> Self {
        let mut credits = HashMap::new();
        credits.insert(
            "5064",
            vec![
                credit("m1", "Doubt", 8.5),
                credit("m2", "Ironweed", 9.0),
                credit("m3", "Skipped", 6.0),
            ],
        );
        credits.insert("101", vec![credit("m1", "Doubt", 8.5)]);

        let mut cast = HashMap::new();
        cast.insert(
            "m1",
            vec![
                member("5064", "Meryl Streep", 0),
                member("101", "Alan Alda", 1),
                member("102", "Amy Adams", 2),
                member("103", "Kevin Kline", 3),
            ],
        );
        cast.insert(
            "m2",
            vec![
                member("5064", "Meryl Streep", 0),
                member("101", "Alan Alda", 1),
                member("104", "Fisher, Carrie", 2),
                member("105", "Hugh Grant", 3),
            ],
        );

        FixtureProvider { credits, cast }
    }
}

#[async_trait]
impl CreditProvider for FixtureProvider {
    async fn credits_for_person(
        &self,
        person: &PersonId,
        min_rating: Option<f64>,
    ) -> ProviderResult<Vec<Credit>> {
        let credits = self
            .credits
            .get(person.as_str())
            .cloned()
            .unwrap_or_default();
        Ok(credits
            .into_iter()
            .filter(|c| min_rating.map_or(true, |t| c.vote_avg >= t))
            .collect())
    }

    async fn cast_for_movie(
        &self,
        movie: &MovieId,
        limit: Option<usize>,
        exclude: &[PersonId],
    ) -> ProviderResult<Vec<CastMember>> {
        let mut cast: Vec<CastMember> = self
            .cast
            .get(movie.as_str())
            .cloned()
            .unwrap_or_default()
            .into_iter()
            .filter(|m| !exclude.contains(&m.id))
            .collect();
        if let Some(limit) = limit {
            cast.truncate(limit);
        }
        Ok(cast)
    }
}

async fn expanded_fixture_graph() -> GraphStore {
    let provider = FixtureProvider::new();
    let config = ExpansionConfig {
        min_rating: 8.0,
        cast_limit: 3,
        rounds: 2,
    };
    Expander::new(&provider, config)
        .run(PersonId::new("5064"), "Meryl Streep")
        .await
        .unwrap()
}

#[tokio::test]
async fn test_expansion_pinned_counts_and_ids() {
    let graph = expanded_fixture_graph().await;

    assert_eq!(graph.total_nodes(), 6);
    assert_eq!(graph.total_edges(), 9);

    // Discovery order is observable.
    let ids: Vec<&str> = graph.nodes().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, vec!["5064", "101", "102", "103", "104", "105"]);

    // total_movies is the qualifying-credit count at insertion time.
    assert_eq!(graph.get_node(&PersonId::new("5064")).unwrap().total_movies, 2);
    assert_eq!(graph.get_node(&PersonId::new("101")).unwrap().total_movies, 1);
    assert_eq!(graph.get_node(&PersonId::new("102")).unwrap().total_movies, 0);

    // The comma in the provider's name never reaches the store.
    assert_eq!(graph.get_node(&PersonId::new("104")).unwrap().name, "Fisher Carrie");
}

#[tokio::test]
async fn test_expansion_edge_sequence() {
    let graph = expanded_fixture_graph().await;

    let edges: Vec<(&str, &str)> = graph
        .edges()
        .iter()
        .map(|e| (e.source.as_str(), e.target.as_str()))
        .collect();
    assert_eq!(
        edges,
        vec![
            // Round 0: both of the seed's qualifying movies. The shared
            // co-star in m2 is already a node but still gets an edge.
            ("5064", "101"),
            ("5064", "102"),
            ("5064", "103"),
            ("5064", "101"),
            ("5064", "104"),
            ("5064", "105"),
            // Round 1: only 101 has a qualifying credit; its cast is all
            // known, so only edges accumulate.
            ("101", "5064"),
            ("101", "102"),
            ("101", "103"),
        ]
    );
}

#[tokio::test]
async fn test_expansion_max_degree() {
    let graph = expanded_fixture_graph().await;

    let top = graph.max_degree_nodes().unwrap();
    assert_eq!(top.len(), 1);
    assert_eq!(top[&PersonId::new("5064")], 7);
}

#[tokio::test]
async fn test_expansion_json_weights() {
    let graph = expanded_fixture_graph().await;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("graph.json");
    graph.write_graph_to_json(&path).unwrap();

    let doc: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    let links = doc["links"].as_array().unwrap();
    assert_eq!(links.len(), 7);

    // (5064,101) twice in round 0 plus (101,5064) in round 1 collapse into
    // one canonical link of weight 3.
    let heavy = links
        .iter()
        .find(|l| l["source"] == "101" && l["target"] == "5064")
        .unwrap();
    assert_eq!(heavy["weight"], 3);

    for link in links {
        if link != heavy {
            assert_eq!(link["weight"], 1);
        }
    }

    let total: u64 = links.iter().map(|l| l["weight"].as_u64().unwrap()).sum();
    assert_eq!(total as usize, graph.total_edges());
}

#[tokio::test]
async fn test_expansion_csv_rows_are_well_formed() {
    let graph = expanded_fixture_graph().await;

    let dir = tempfile::tempdir().unwrap();
    let nodes_path = dir.path().join("nodes.csv");
    graph.write_nodes_file(&nodes_path).unwrap();

    for line in fs::read_to_string(&nodes_path).unwrap().lines() {
        assert_eq!(line.split(',').count(), 3, "bad row: {line}");
    }
}
