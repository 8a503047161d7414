use std::fmt;
use std::rc::Rc;

/// One step of a ladder under construction.
///
/// Nodes link back to their parent, so sibling branches share a common
/// prefix without ever copying or mutating it.
#[derive(Debug)]
pub(crate) struct LadderNode {
    word: Rc<str>,
    parent: Option<Rc<LadderNode>>,
    depth: usize,
}

impl LadderNode {
    /// Creates the single-word ladder every search starts from.
    pub(crate) fn root(word: Rc<str>) -> Rc<Self> {
        Rc::new(LadderNode {
            word,
            parent: None,
            depth: 1,
        })
    }

    /// Returns a new ladder that ends with `word`, leaving `self` untouched.
    pub(crate) fn extend(self: &Rc<Self>, word: Rc<str>) -> Rc<Self> {
        Rc::new(LadderNode {
            word,
            parent: Some(Rc::clone(self)),
            depth: self.depth + 1,
        })
    }

    pub(crate) fn word(&self) -> &str {
        &self.word
    }

    /// Walks the parent links back to the root and returns the words in
    /// start-to-end order.
    pub(crate) fn to_path(&self) -> LadderPath {
        let mut words = Vec::with_capacity(self.depth);
        let mut current = Some(self);
        while let Some(node) = current {
            words.push(node.word.to_string());
            current = node.parent.as_deref();
        }
        words.reverse();
        LadderPath { words }
    }
}

/// A finished word ladder, first word to last.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LadderPath {
    words: Vec<String>,
}

impl LadderPath {
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Number of words on the ladder, both ends included.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn start(&self) -> Option<&str> {
        self.words.first().map(String::as_str)
    }

    pub fn target(&self) -> Option<&str> {
        self.words.last().map(String::as_str)
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &str> + '_ {
        self.words.iter().map(String::as_str)
    }

    /// Same ladder read from the last word back to the first.
    pub fn reversed(&self) -> LadderPath {
        LadderPath {
            words: self.words.iter().rev().cloned().collect(),
        }
    }
}

impl fmt::Display for LadderPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.words.join(" "))
    }
}
