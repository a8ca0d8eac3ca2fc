//! Word pools for synthetic text

use rand::seq::SliceRandom;
use rand::Rng;

const WORDS: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed", "do",
    "eiusmod", "tempor", "incididunt", "ut", "labore", "et", "dolore", "magna", "aliqua", "enim",
    "ad", "minim", "veniam", "quis", "nostrud", "exercitation", "ullamco", "laboris", "nisi",
    "aliquip", "ex", "ea", "commodo", "consequat", "duis", "aute", "irure", "in", "reprehenderit",
    "voluptate", "velit", "esse", "cillum", "fugiat", "nulla", "pariatur", "excepteur", "sint",
    "occaecat", "cupidatat", "non", "proident", "sunt", "culpa", "qui", "officia", "deserunt",
    "mollit", "anim", "id", "est", "laborum",
];

const FIRST_NAMES: &[&str] = &[
    "Ana", "Bruno", "Carla", "Diego", "Elena", "Felipe", "Gabriela", "Hugo", "Isabel", "Jonas",
    "Karina", "Lucas", "Marina", "Nicolas", "Olivia", "Pedro", "Rafaela", "Samuel", "Tatiana",
    "Victor",
];

const LAST_NAMES: &[&str] = &[
    "Almeida", "Barros", "Costa", "Duarte", "Ferreira", "Gomes", "Lima", "Martins", "Nunes",
    "Oliveira", "Pereira", "Ribeiro", "Santos", "Silva", "Teixeira",
];

pub(crate) fn words<R: Rng>(rng: &mut R, count: usize) -> String {
    let mut picked = Vec::with_capacity(count);
    for _ in 0..count {
        if let Some(word) = WORDS.choose(&mut *rng) {
            picked.push(*word);
        }
    }
    picked.join(" ")
}

pub(crate) fn sentence<R: Rng>(rng: &mut R) -> String {
    let count = rng.gen_range(4..=10);
    let text = words(rng, count);
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => format!("{}{}.", first.to_uppercase(), chars.as_str()),
        None => String::new(),
    }
}

pub(crate) fn paragraph<R: Rng>(rng: &mut R) -> String {
    let count = rng.gen_range(3..=6);
    let mut sentences = Vec::with_capacity(count);
    for _ in 0..count {
        sentences.push(sentence(&mut *rng));
    }
    sentences.join(" ")
}

pub(crate) fn paragraphs<R: Rng>(rng: &mut R, count: usize) -> String {
    let mut paras = Vec::with_capacity(count);
    for _ in 0..count {
        paras.push(paragraph(&mut *rng));
    }
    paras.join("\n")
}

pub(crate) fn full_name<R: Rng>(rng: &mut R) -> String {
    let first = FIRST_NAMES.choose(&mut *rng).copied().unwrap_or("Ana");
    let last = LAST_NAMES.choose(rng).copied().unwrap_or("Silva");
    format!("{} {}", first, last)
}
