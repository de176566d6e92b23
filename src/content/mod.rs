// SPDX-License-Identifier: MPL-2.0
//! Static page content.
//!
//! Everything here is trusted, read-only data. Text that mentions how long
//! Mike has been publicly traded carries a `{years}` placeholder, filled in
//! with [`interpolate_years`].

use chrono::Datelike;

pub const NAME: &str = "K. Mike Merrill";
pub const LOGO: &str = "K.MIKE.MERRILL";
pub const TAGLINE: &str = "The World's First Publicly Traded Person";
pub const LOCATION: &str = "Los Angeles, CA";
pub const EMAIL: &str = "kmikeym@kmikeym.com";
pub const SHARES_URL: &str = "https://kmikeym.com";

/// Year the shares went on sale.
pub const TRADING_SINCE: i32 = 2008;
pub const BIRTH_YEAR: i32 = 1977;

const YEARS_PLACEHOLDER: &str = "{years}";

/// A labelled external URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link {
    pub label: &'static str,
    pub url: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Topic {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
}

/// Host serving a talk's embedded player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmbedHost {
    YouTube,
    Wistia,
}

impl EmbedHost {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            EmbedHost::YouTube => "YouTube",
            EmbedHost::Wistia => "Wistia",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Talk {
    pub venue: &'static str,
    pub title: &'static str,
    pub duration: &'static str,
    /// Opaque player URL; never parsed.
    pub embed_url: &'static str,
    pub host: EmbedHost,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PressItem {
    pub title: &'static str,
    pub source: &'static str,
    pub url: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryEntry {
    pub date: &'static str,
    pub event: &'static str,
}

pub const BIO_LEAD: &str = "Mike Merrill has been publicly traded since 2008.";
pub const BIO: &str = "Shareholders buy shares and vote on his life decisions, from career \
moves to relationships. He's spent {years} years turning one life into a live experiment in \
governance, markets, and identity.";

pub const CREDIBILITY: &[&str] = &[
    "TEDx",
    "ideacity",
    "XOXO",
    "Future Congress",
    "WIRED",
    "VICE",
    "Variety",
];

pub const TOPICS: &[Topic] = &[
    Topic {
        title: "Community Through Capitalism",
        description: "How giving up control creates deeper connection. {years} years of \
shareholder democracy proves that markets aren't just about money; they're about trust.",
        tags: &["Governance", "DAOs", "Community", "Creator Economy"],
    },
    Topic {
        title: "The Publicly Traded Life",
        description: "Identity, privacy, and agency in the age of the algorithm, examined \
through the lens of one person who made it all explicit.",
        tags: &["Tech", "Culture", "Identity", "Privacy"],
    },
    Topic {
        title: "Vibe Coding & the AI-Native Life",
        description: "How a non-technical publicly traded person uses AI agents to run his \
life, from morning routines to shareholder reports.",
        tags: &["AI", "Automation", "Future of Work", "Vibe Coding"],
    },
];

pub const TALKS: &[Talk] = &[
    Talk {
        venue: "TEDxVienna",
        title: "How I became the world's first publicly traded person",
        duration: "22:14",
        embed_url: "https://www.youtube.com/embed/PPa1HeWGs-Y",
        host: EmbedHost::YouTube,
    },
    Talk {
        venue: "ideacity Toronto",
        title: "Mike Merrill likes to be controlled",
        duration: "18:42",
        embed_url: "https://www.youtube.com/embed/8p6doeO2eIk",
        host: EmbedHost::YouTube,
    },
    Talk {
        venue: "Future Congress",
        title: "Personal Corporatehood (Keynote)",
        duration: "22:44",
        embed_url: "https://fast.wistia.net/embed/iframe/78tcb5bwjt",
        host: EmbedHost::Wistia,
    },
    Talk {
        venue: "TODAY Show",
        title: "Mike Merrill on the TODAY Show",
        duration: "4:39",
        embed_url: "https://fast.wistia.net/embed/iframe/ew05qq4yzy",
        host: EmbedHost::Wistia,
    },
];

pub const PRESS: &[PressItem] = &[
    PressItem {
        title: "Executive Producer of IPO Series with Amazon & Sony Pictures",
        source: "Variety + Deadline",
        url: "https://news.kmikeym.com/mike-merrill-to-executive-produce-ipo-series-with-amazon-and-sony-pictures-television/",
    },
    PressItem {
        title: "The Man Who Sold Shares of Himself",
        source: "The Hustle",
        url: "https://news.kmikeym.com/the-man-who-sold-shares-of-himself/",
    },
    PressItem {
        title: "Meet The Man Selling Influence Over His Personal Life Decisions",
        source: "VICE News",
        url: "https://news.kmikeym.com/meet-the-man-selling-influence-over-his-personal-life-decisions/",
    },
    PressItem {
        title: "Meet the Man Who Sold His Fate to Investors at $1 a Share",
        source: "WIRED",
        url: "https://news.kmikeym.com/meet-the-man-who-sold-his-fate-to-investors-at-1-a-share/",
    },
];

pub const ABOUT: &[&str] = &[
    "Mike Merrill created KmikeyM in 2008, selling shares in himself and letting shareholders \
vote on his life decisions. What started as an experiment became a {years}-year practice in \
radical transparency and participatory governance.",
    "He's the executive producer of an Amazon & Sony Pictures television series based on his \
life, and currently serves as Head of Content at Vibes DIY. Previously he co-founded Chroma \
(acquired), went through the Barclays Fintech Accelerator and the Nike+ Accelerator, and spent \
ten years at Panic.",
    "Based in Los Angeles, CA.",
];

/// Links mentioned in the about paragraphs.
pub const ABOUT_LINKS: &[Link] = &[
    Link {
        label: "KmikeyM",
        url: "https://kmikeym.com",
    },
    Link {
        label: "Amazon & Sony Pictures television series",
        url: "https://news.kmikeym.com/mike-merrill-to-executive-produce-ipo-series-with-amazon-and-sony-pictures-television/",
    },
    Link {
        label: "Vibes DIY",
        url: "https://vibes.diy",
    },
    Link {
        label: "Panic",
        url: "https://panic.com",
    },
];

pub const MILESTONES: &[&str] = &[
    "Born in the dark wastelands of the arctic",
    "Grew up alone",
    "Had a near-death experience",
    "Joined the US Army",
    "Lost my sense of purpose",
    "Read Crossing the Chasm and it changed my life",
    "Worked my way up the ranks at a global conglomerate",
];

pub const HISTORY: &[HistoryEntry] = &[
    HistoryEntry {
        date: "May 2020",
        event: "K5M Shareholder Conference: Keynote",
    },
    HistoryEntry {
        date: "May 2020",
        event: "Ethereal Summit: Personal Tokens Roundtable",
    },
    HistoryEntry {
        date: "Jun 2019",
        event: "Future Congress: Personal Corporatehood",
    },
    HistoryEntry {
        date: "Dec 2016",
        event: "K5M Shareholder Conference: Keynote",
    },
    HistoryEntry {
        date: "Jan 2016",
        event: "Portland State University: \"Show & Tell\" Lecture",
    },
    HistoryEntry {
        date: "Jun 2015",
        event: "Curiosity Club: Fun w/ Factual Failures",
    },
    HistoryEntry {
        date: "Oct 2014",
        event: "XOXO: The New Disrupters",
    },
    HistoryEntry {
        date: "May 2014",
        event: "Webvisions: Watch Your Wearables Disappear",
    },
    HistoryEntry {
        date: "Jun 2013",
        event: "ideacity: Contractual Romance",
    },
    HistoryEntry {
        date: "Sep 2012",
        event: "Ten Conf: Community Through Capitalism",
    },
    HistoryEntry {
        date: "Aug 2012",
        event: "CyborgCamp: Community Through Capitalism",
    },
    HistoryEntry {
        date: "Oct 2010",
        event: "AIA Architecture and Design Festival",
    },
    HistoryEntry {
        date: "Dec 2009",
        event: "Research Club: Community Through Capitalism",
    },
];

pub const INVITE_TYPES: &[&str] = &["Keynote", "Panel", "Podcast", "Workshop", "TV / Media"];

pub const FOOTER_LINKS: &[Link] = &[
    Link {
        label: "KmikeyM",
        url: "https://kmikeym.com",
    },
    Link {
        label: "IMDb",
        url: "https://www.imdb.com/name/nm5017870/",
    },
    Link {
        label: "LinkedIn",
        url: "https://www.linkedin.com/in/kmikeym/",
    },
    Link {
        label: "YouTube",
        url: "https://www.youtube.com/@kmikeym2107",
    },
    Link {
        label: "X",
        url: "https://twitter.com/kmikeym",
    },
    Link {
        label: "Instagram",
        url: "https://www.instagram.com/kmikeym/",
    },
];

/// Calendar year on the local clock.
#[must_use]
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Years publicly traded as of `year`; never negative.
#[must_use]
pub fn years_traded(year: i32) -> u32 {
    u32::try_from(year - TRADING_SINCE).unwrap_or(0)
}

/// Replaces every `{years}` placeholder in `text`.
#[must_use]
pub fn interpolate_years(text: &str, years: u32) -> String {
    text.replace(YEARS_PLACEHOLDER, &years.to_string())
}

/// Two-digit, one-based topic number: `01`, `02`, ...
#[must_use]
pub fn topic_number(index: usize) -> String {
    format!("{:02}", index + 1)
}

/// Footer copyright line for `year`.
#[must_use]
pub fn copyright(year: i32) -> String {
    format!("© {BIRTH_YEAR}–{year} {NAME}")
}
