use std::collections::{HashSet, VecDeque};
use std::rc::Rc;

use super::error::LadderError;
use super::neighbors::NeighborGenerator;
use super::path::{LadderNode, LadderPath};
use crate::dictionary::Dictionary;

/// Checks that `start` and `target` form a searchable query.
///
/// Checks run in this order: empty word, identical words, unequal length,
/// then dictionary membership of `start` and of `target`.
pub fn validate_query(dictionary: &Dictionary, start: &str, target: &str) -> Result<(), LadderError> {
    if start.is_empty() || target.is_empty() {
        return Err(LadderError::EmptyWord);
    }
    if start == target {
        return Err(LadderError::IdenticalWords(start.to_string()));
    }
    let (start_len, target_len) = (start.chars().count(), target.chars().count());
    if start_len != target_len {
        return Err(LadderError::LengthMismatch {
            start: start_len,
            target: target_len,
        });
    }
    for word in [start, target] {
        if !dictionary.contains(word) {
            return Err(LadderError::NotInDictionary(word.to_string()));
        }
    }
    Ok(())
}

/// Outcome of one search together with the work it took.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchReport {
    /// Shortest ladder, or `None` when the words are not connected.
    pub ladder: Option<LadderPath>,
    /// Ladders taken off the frontier and expanded.
    pub expanded: usize,
    /// Distinct words reached, the start word included.
    pub discovered: usize,
}

/// Breadth-first shortest ladder search over a borrowed dictionary.
///
/// The finder holds no per-search state: the visited set and the frontier
/// live only for the duration of one call, so a single finder can serve any
/// number of queries.
#[derive(Clone, Copy, Debug)]
pub struct LadderFinder<'d> {
    dictionary: &'d Dictionary,
    generator: NeighborGenerator<'d>,
}

impl<'d> LadderFinder<'d> {
    pub fn new(dictionary: &'d Dictionary) -> Self {
        LadderFinder {
            dictionary,
            generator: NeighborGenerator::new(dictionary),
        }
    }

    /// Returns a shortest ladder from `start` to `target`, or `None` when no
    /// ladder exists.
    ///
    /// # Errors
    /// Returns `LadderError` when the query fails `validate_query`.
    pub fn find(&self, start: &str, target: &str) -> Result<Option<LadderPath>, LadderError> {
        self.search(start, target).map(|report| report.ladder)
    }

    /// Runs the search and reports how much of the graph it explored.
    ///
    /// Words are marked visited when they are enqueued, never when they are
    /// dequeued, so no word enters the frontier twice. The search stops at
    /// the first neighbor equal to `target`; ties between equally short
    /// ladders are broken by `NeighborGenerator` order.
    pub fn search(&self, start: &str, target: &str) -> Result<SearchReport, LadderError> {
        validate_query(self.dictionary, start, target)?;

        let start: Rc<str> = Rc::from(start);
        let mut visited: HashSet<Rc<str>> = HashSet::new();
        visited.insert(Rc::clone(&start));
        let mut frontier: VecDeque<Rc<LadderNode>> = VecDeque::new();
        frontier.push_back(LadderNode::root(start));
        let mut expanded = 0;

        while let Some(node) = frontier.pop_front() {
            expanded += 1;
            for neighbor in self.generator.neighbors(node.word()) {
                if visited.contains(neighbor.as_str()) {
                    continue;
                }
                let neighbor: Rc<str> = Rc::from(neighbor);
                visited.insert(Rc::clone(&neighbor));
                let next = node.extend(neighbor);
                if next.word() == target {
                    return Ok(SearchReport {
                        ladder: Some(next.to_path()),
                        expanded,
                        discovered: visited.len(),
                    });
                }
                frontier.push_back(next);
            }
        }

        Ok(SearchReport {
            ladder: None,
            expanded,
            discovered: visited.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn assert_valid_ladder(dictionary: &Dictionary, path: &LadderPath, start: &str, target: &str) {
        assert_eq!(path.start(), Some(start));
        assert_eq!(path.target(), Some(target));
        let words = path.words();
        for word in words {
            assert!(dictionary.contains(word), "{word} not in dictionary");
        }
        for pair in words.windows(2) {
            let diff = pair[0].chars().zip(pair[1].chars()).filter(|(a, b)| a != b).count();
            assert_eq!(diff, 1, "{} -> {} is not one step", pair[0], pair[1]);
        }
        let unique: HashSet<&String> = words.iter().collect();
        assert_eq!(unique.len(), words.len(), "ladder repeats a word");
    }

    /// Distances from `start` by exhaustive relaxation, independent of the finder.
    fn brute_force_distances(dictionary: &Dictionary, words: &[&str], start: &str) -> HashMap<String, usize> {
        let generator = NeighborGenerator::new(dictionary);
        let mut dist: HashMap<String, usize> = HashMap::new();
        dist.insert(start.to_string(), 1);
        let mut changed = true;
        while changed {
            changed = false;
            for word in words {
                let Some(&d) = dist.get(*word) else { continue };
                for neighbor in generator.neighbors(word) {
                    let entry = dist.entry(neighbor).or_insert(usize::MAX);
                    if d + 1 < *entry {
                        *entry = d + 1;
                        changed = true;
                    }
                }
            }
        }
        dist
    }

    #[test]
    fn code_to_data() {
        let dictionary = Dictionary::from_words(["code", "cade", "cate", "date", "data"]);
        let path = LadderFinder::new(&dictionary).find("code", "data").unwrap().unwrap();
        assert_eq!(path.words(), ["code", "cade", "cate", "date", "data"]);
    }

    #[test]
    fn hot_to_dog_takes_the_short_route() {
        let dictionary = Dictionary::from_words(["hot", "dot", "dog", "cog", "cot"]);
        let path = LadderFinder::new(&dictionary).find("hot", "dog").unwrap().unwrap();
        assert_eq!(path.words(), ["hot", "dot", "dog"]);
    }

    #[test]
    fn disconnected_words_have_no_ladder() {
        let dictionary = Dictionary::from_words(["abc", "xyz"]);
        let report = LadderFinder::new(&dictionary).search("abc", "xyz").unwrap();
        assert_eq!(report.ladder, None);
        assert_eq!(report.expanded, 1);
        assert_eq!(report.discovered, 1);
    }

    #[test]
    fn single_letter_step() {
        let dictionary = Dictionary::from_words(["a", "b"]);
        let path = LadderFinder::new(&dictionary).find("a", "b").unwrap().unwrap();
        assert_eq!(path.words(), ["a", "b"]);
    }

    #[test]
    fn word_reached_twice_is_queued_once() {
        // aa -> ba -> bb and aa -> ab -> bb; bb must enter the frontier once.
        let dictionary = Dictionary::from_words(["aa", "ba", "ab", "bb", "zz"]);
        let report = LadderFinder::new(&dictionary).search("aa", "zz").unwrap();
        assert_eq!(report.ladder, None);
        assert_eq!(report.expanded, 4);
        assert_eq!(report.discovered, 4);
    }

    #[test]
    fn stops_as_soon_as_target_is_reached() {
        // hot expands to cot and dot; cot queues cog; dot reaches dog and the
        // search ends without expanding cog or dog.
        let dictionary = Dictionary::from_words(["hot", "dot", "dog", "cog", "cot"]);
        let report = LadderFinder::new(&dictionary).search("hot", "dog").unwrap();
        assert_eq!(report.ladder.unwrap().words(), ["hot", "dot", "dog"]);
        assert_eq!(report.expanded, 3);
        assert_eq!(report.discovered, 5);
    }

    #[test]
    fn exhausts_component_without_reaching_target() {
        let dictionary = Dictionary::from_words(["cat", "cot", "cog", "dog", "ink", "irk"]);
        let report = LadderFinder::new(&dictionary).search("cat", "ink").unwrap();
        assert_eq!(report.ladder, None);
        assert_eq!(report.discovered, 4);
        assert_eq!(report.expanded, 4);
    }

    #[test]
    fn ties_break_by_position_then_alphabet() {
        // cat -> bat -> bit and cat -> cit -> bit are both two steps; the
        // first position is expanded first.
        let dictionary = Dictionary::from_words(["cat", "bat", "cit", "bit"]);
        let path = LadderFinder::new(&dictionary).find("cat", "bit").unwrap().unwrap();
        assert_eq!(path.words(), ["cat", "bat", "bit"]);
    }

    #[test]
    fn repeated_searches_agree() {
        let dictionary = Dictionary::from_words([
            "cold", "cord", "card", "ward", "warm", "worm", "word", "wood", "wold", "bold", "bolt",
        ]);
        let finder = LadderFinder::new(&dictionary);
        let first = finder.find("cold", "warm").unwrap();
        for _ in 0..5 {
            assert_eq!(finder.find("cold", "warm").unwrap(), first);
        }
        let path = first.unwrap();
        assert_eq!(path.len(), 5);
        assert_valid_ladder(&dictionary, &path, "cold", "warm");
    }

    #[test]
    fn ladders_are_as_short_as_brute_force() {
        let words = [
            "cold", "cord", "card", "ward", "warm", "worm", "word", "wood", "wold", "bold", "bolt",
            "boat", "coat", "cost", "most", "mast", "mass", "bass", "base", "case", "cast",
        ];
        let dictionary = Dictionary::from_words(words);
        let finder = LadderFinder::new(&dictionary);
        let start = "cold";
        let distances = brute_force_distances(&dictionary, &words, start);

        for target in words.iter().filter(|w| **w != start) {
            let found = finder.find(start, target).unwrap();
            match distances.get(*target) {
                Some(&expected) => {
                    let path = found.unwrap_or_else(|| panic!("no ladder to {target}"));
                    assert_eq!(path.len(), expected, "ladder to {target} is not minimal");
                    assert_valid_ladder(&dictionary, &path, start, target);
                }
                None => assert!(found.is_none(), "unexpected ladder to {target}"),
            }
        }
    }

    #[test]
    fn rejects_invalid_queries() {
        let dictionary = Dictionary::from_words(["cat", "dog", "bird"]);
        let finder = LadderFinder::new(&dictionary);
        assert_eq!(finder.find("", "dog"), Err(LadderError::EmptyWord));
        assert_eq!(finder.find("cat", "cat"), Err(LadderError::IdenticalWords("cat".into())));
        assert_eq!(
            finder.find("cat", "bird"),
            Err(LadderError::LengthMismatch { start: 3, target: 4 })
        );
        assert_eq!(finder.find("cow", "dog"), Err(LadderError::NotInDictionary("cow".into())));
        assert_eq!(finder.find("cat", "cow"), Err(LadderError::NotInDictionary("cow".into())));
    }
}
