#![allow(dead_code)]

use env_logger::Env;
use seeker::{Cost, Graph};

/// Sets up logging output for tests, set `MY_LOG_LEVEL=trace` to see every expansion.
pub fn init() {
    let env = Env::default()
        .filter_or("MY_LOG_LEVEL", "debug")
        .write_style_or("MY_LOG_STYLE", "always");

    let _ = env_logger::Builder::from_env(env).is_test(true).try_init();
}

/// The cities of the Romania road map, abbreviated to their first three letters.
pub const CITIES: [&str; 20] = [
    "ora", "zer", "ara", "tim", "lug", "meh", "dro", "sib", "rim", "cra", "fag", "pit", "giu",
    "buc", "urz", "hir", "efo", "vas", "ias", "nea",
];

const ROADS: [(&str, &str, Cost); 23] = [
    ("ora", "zer", 71),
    ("ora", "sib", 151),
    ("zer", "ara", 75),
    ("ara", "sib", 140),
    ("ara", "tim", 118),
    ("tim", "lug", 111),
    ("lug", "meh", 70),
    ("meh", "dro", 75),
    ("dro", "cra", 120),
    ("sib", "fag", 99),
    ("sib", "rim", 80),
    ("rim", "cra", 146),
    ("rim", "pit", 97),
    ("cra", "pit", 138),
    ("fag", "buc", 211),
    ("pit", "buc", 101),
    ("giu", "buc", 90),
    ("buc", "urz", 85),
    ("urz", "vas", 142),
    ("urz", "hir", 98),
    ("hir", "efo", 86),
    ("vas", "ias", 92),
    ("ias", "nea", 87),
];

/// Straight line distances to Bucharest.
const TO_BUCHAREST: [(&str, Cost); 20] = [
    ("ara", 366),
    ("buc", 0),
    ("cra", 160),
    ("dro", 242),
    ("efo", 161),
    ("fag", 176),
    ("giu", 77),
    ("hir", 151),
    ("ias", 226),
    ("lug", 244),
    ("meh", 241),
    ("nea", 234),
    ("ora", 380),
    ("pit", 100),
    ("rim", 193),
    ("sib", 253),
    ("tim", 329),
    ("urz", 80),
    ("vas", 199),
    ("zer", 374),
];

/// The road map, where the Action of every road is the name of the city it leads to.
pub fn romania() -> Graph<&'static str, &'static str> {
    let mut graph = Graph::new();
    for (a, b, cost) in ROADS {
        graph.add_edge(a, b, b, cost);
        graph.add_edge(b, a, a, cost);
    }
    graph
}

/// Straight line distance to the goal. Only known for Bucharest, any other goal gets 0.
pub fn straight_line(state: &&'static str, goal: &&'static str) -> Cost {
    if *goal != "buc" {
        return 0;
    }
    TO_BUCHAREST
        .iter()
        .find(|(city, _)| city == state)
        .map_or(0, |&(_, distance)| distance)
}

/// Every ordered pair of distinct cities.
pub fn city_pairs() -> Vec<(&'static str, &'static str)> {
    CITIES
        .iter()
        .flat_map(|&a| CITIES.iter().filter(move |&&b| b != a).map(move |&b| (a, b)))
        .collect()
}

/// Sums up the cost of following `actions` from `start`.
pub fn cost_of<A: PartialEq>(
    graph: &Graph<&'static str, A>,
    start: &'static str,
    actions: &[A],
) -> Cost {
    let mut current = start;
    let mut total = 0;
    for action in actions {
        let &(next, _, cost) = graph
            .edges(&current)
            .iter()
            .find(|(_, a, _)| a == action)
            .expect("action is not an edge of the current city");
        current = next;
        total += cost;
    }
    total
}

/// Textbook Dijkstra with lazy deletion, written independently of the crate's search.
pub fn reference_distance<St, A>(graph: &Graph<St, A>, start: St, goal: St) -> Option<Cost>
where
    St: Eq + std::hash::Hash + Clone + Ord,
{
    use std::cmp::Reverse;
    use std::collections::{BinaryHeap, HashMap};

    let mut dist: HashMap<St, Cost> = HashMap::new();
    let mut heap = BinaryHeap::new();
    dist.insert(start.clone(), 0);
    heap.push(Reverse((0, start)));

    while let Some(Reverse((d, node))) = heap.pop() {
        if node == goal {
            return Some(d);
        }
        if dist.get(&node).map_or(false, |&best| d > best) {
            continue;
        }
        for (next, _, cost) in graph.edges(&node) {
            let candidate = d + cost;
            if dist.get(next).map_or(true, |&best| candidate < best) {
                dist.insert(next.clone(), candidate);
                heap.push(Reverse((candidate, next.clone())));
            }
        }
    }
    None
}
