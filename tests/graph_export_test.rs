use costar::graph::{GraphStore, PersonId};
use std::fs;

fn pid(id: &str) -> PersonId {
    PersonId::new(id)
}

#[test]
fn test_csv_round_trip() {
    let mut graph = GraphStore::new();
    graph.add_node(pid("5064"), "Meryl Streep", 2);
    graph.add_node(pid("101"), "Alan Alda", 1);
    graph.add_node(pid("102"), "Amy Adams", 0);
    graph.add_edge(pid("5064"), pid("101"));
    graph.add_edge(pid("5064"), pid("101"));
    graph.add_edge(pid("101"), pid("102"));

    let dir = tempfile::tempdir().unwrap();
    let nodes_path = dir.path().join("nodes.csv");
    let edges_path = dir.path().join("edges.csv");
    graph.write_nodes_file(&nodes_path).unwrap();
    graph.write_edges_file(&edges_path).unwrap();

    let hydrated = GraphStore::from_files(&nodes_path, &edges_path).unwrap();

    assert_eq!(hydrated.total_nodes(), graph.total_nodes());
    assert_eq!(hydrated.total_edges(), graph.total_edges());

    let original: Vec<(&str, &str, u32)> = graph
        .nodes()
        .map(|n| (n.id.as_str(), n.name.as_str(), n.total_movies))
        .collect();
    let restored: Vec<(&str, &str, u32)> = hydrated
        .nodes()
        .map(|n| (n.id.as_str(), n.name.as_str(), n.total_movies))
        .collect();
    assert_eq!(original, restored);

    let edges: Vec<(&str, &str)> = hydrated
        .edges()
        .iter()
        .map(|e| (e.source.as_str(), e.target.as_str()))
        .collect();
    assert_eq!(
        edges,
        vec![("5064", "101"), ("5064", "101"), ("101", "102")]
    );
}

#[test]
fn test_hydration_accepts_two_column_node_schema() {
    // Older exports carry only id,name; total_movies defaults to 0.
    let dir = tempfile::tempdir().unwrap();
    let nodes_path = dir.path().join("nodes.csv");
    let edges_path = dir.path().join("edges.csv");
    fs::write(&nodes_path, "id,name\n5064,Meryl Streep\n101,Alan Alda\n").unwrap();
    fs::write(&edges_path, "source,target\n5064,101\n").unwrap();

    let graph = GraphStore::from_files(&nodes_path, &edges_path).unwrap();
    assert_eq!(graph.total_nodes(), 2);
    assert_eq!(graph.total_edges(), 1);
    let seed = graph.get_node(&pid("5064")).unwrap();
    assert_eq!(seed.name, "Meryl Streep");
    assert_eq!(seed.total_movies, 0);
}

#[test]
fn test_hydration_rejects_bad_movie_count() {
    let dir = tempfile::tempdir().unwrap();
    let nodes_path = dir.path().join("nodes.csv");
    let edges_path = dir.path().join("edges.csv");
    fs::write(&nodes_path, "id,name,total_movies\n5064,Meryl Streep,lots\n").unwrap();
    fs::write(&edges_path, "source,target\n").unwrap();

    assert!(GraphStore::from_files(&nodes_path, &edges_path).is_err());
}

#[test]
fn test_json_weight_sums_match_raw_insertions() {
    let mut graph = GraphStore::new();
    for (s, t) in [("a", "b"), ("b", "a"), ("a", "c"), ("a", "b"), ("c", "a")] {
        graph.add_edge(pid(s), pid(t));
    }

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("graph.json");
    graph.write_graph_to_json(&path).unwrap();

    let doc: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    let links = doc["links"].as_array().unwrap();

    let total: u64 = links.iter().map(|l| l["weight"].as_u64().unwrap()).sum();
    assert_eq!(total as usize, graph.total_edges());

    assert_eq!(links.len(), 2);
    assert_eq!(links[0]["source"], "a");
    assert_eq!(links[0]["target"], "b");
    assert_eq!(links[0]["weight"], 3);
    assert_eq!(links[1]["weight"], 2);
}
