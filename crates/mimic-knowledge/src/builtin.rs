// SPDX-FileCopyrightText: 2026 Mimic Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Facts compiled into the binary, as `(key, fact)` in search order.

pub(crate) const BIRTHDAY: &[(&str, &str)] = &[
    (
        "cake",
        "Birthday cakes started in ancient Greece! They made round cakes to honor Artemis, the moon goddess. The candles represented moonlight!",
    ),
    (
        "song",
        "The 'Happy Birthday' song is from 1893! It was first called 'Good Morning to All' and written by two sisters, Patty and Mildred Hill.",
    ),
    (
        "presents",
        "Birthday gifts started in Europe because people thought evil spirits visited on birthdays, so friends brought gifts to ward them off!",
    ),
    (
        "candles",
        "Adding candles for each year started in Germany. They put a big candle called 'lebensklicht' (light of life) in the middle.",
    ),
    (
        "wishes",
        "Making wishes before blowing candles started because people believed the smoke carried wishes to heaven!",
    ),
    (
        "facts",
        "Birthdays weren't celebrated much until the 1800s because keeping birth records wasn't common before then.",
    ),
];

pub(crate) const GENERAL: &[(&str, &str)] = &[
    (
        "space",
        "There are more stars in the universe than grains of sand on all Earth beaches! The universe is truly mind-blowing.",
    ),
    (
        "ocean",
        "The ocean is deeper than Mount Everest is tall! The Mariana Trench goes down about 11 kilometers.",
    ),
    (
        "animals",
        "A blue whale's heart is so big that a human could swim through its arteries! They're the largest animals ever.",
    ),
    (
        "technology",
        "The first computer programmer was a woman named Ada Lovelace who wrote the first algorithm in the 1840s!",
    ),
    (
        "food",
        "Honey never spoils! Archaeologists found 3,000-year-old honey in Egyptian tombs that's still perfectly good!",
    ),
    (
        "music",
        "Your brain processes music in the same area as language, which is why songs get stuck in your head so easily!",
    ),
    (
        "friendship",
        "Strong friendships can boost your immune system and even increase your lifespan according to science!",
    ),
];

pub(crate) const PERSONAL: &[(&str, &str)] = &[
    (
        "traits",
        "You're one of the most thoughtful people I know, always remembering little details about everyone!",
    ),
    (
        "memories",
        "Remember that time we stayed up way too late talking about everything and nothing? Best night ever!",
    ),
    (
        "friendship",
        "I'm so lucky to have you as a friend. You always know how to make me laugh even on the worst days.",
    ),
];
