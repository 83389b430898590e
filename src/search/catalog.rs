use crate::models::{QuickLink, SearchResult};

/// (title, url, description) for every site the catalog knows about
const CATALOG: &[(&str, &str, &str)] = &[
    (
        "Wikipedia - The Free Encyclopedia",
        "https://wikipedia.org",
        "Wikipedia is a free online encyclopedia, created and edited by volunteers around the world.",
    ),
    (
        "GitHub: Where the world builds software",
        "https://github.com",
        "GitHub is where over 100 million developers shape the future of software, together.",
    ),
    (
        "Stack Overflow - Where Developers Learn & Share",
        "https://stackoverflow.com",
        "Stack Overflow is the largest online community for programmers to learn and share their knowledge.",
    ),
    (
        "MDN Web Docs",
        "https://developer.mozilla.org",
        "Resources for developers, by developers. Documentation for web technologies including HTML, CSS, and JavaScript.",
    ),
    (
        "Reddit - Dive into anything",
        "https://reddit.com",
        "Reddit is a network of communities where people can dive into their interests, hobbies and passions.",
    ),
    (
        "Medium – Where good ideas find you",
        "https://medium.com",
        "Medium is an open platform where readers find dynamic thinking, and where expert and undiscovered voices can share their writing.",
    ),
    (
        "YouTube",
        "https://youtube.com",
        "Enjoy the videos and music you love, upload original content, and share it all with friends, family, and the world.",
    ),
    (
        "Twitter / X",
        "https://twitter.com",
        "From breaking news and entertainment to sports and politics, get the full story with all the live commentary.",
    ),
];

const QUICK_LINKS: &[(&str, &str)] = &[
    ("Wikipedia", "https://wikipedia.org"),
    ("GitHub", "https://github.com"),
    ("Stack Overflow", "https://stackoverflow.com"),
    ("YouTube", "https://youtube.com"),
    ("Reddit", "https://reddit.com"),
    ("Twitter", "https://twitter.com"),
    ("Medium", "https://medium.com"),
    ("MDN Web Docs", "https://developer.mozilla.org"),
];

/// Home page shortcuts
pub fn quick_links() -> Vec<QuickLink> {
    QUICK_LINKS
        .iter()
        .map(|(name, url)| QuickLink { name: name.to_string(), url: url.to_string() })
        .collect()
}

pub struct SearchCatalog {
    results: Vec<SearchResult>,
}

impl SearchCatalog {
    pub fn new() -> Self {
        let results = CATALOG
            .iter()
            .map(|(title, url, description)| SearchResult {
                title: title.to_string(),
                url: url.to_string(),
                description: description.to_string(),
            })
            .collect();
        Self { results }
    }

    /// Results matching `query`, in catalog order
    pub fn search(&self, query: &str) -> Vec<&SearchResult> {
        if query.is_empty() {
            return self.results.iter().collect();
        }

        let lower_query = query.to_lowercase();
        self.results.iter().filter(|result| matches_query(result, &lower_query)).collect()
    }
}

impl Default for SearchCatalog {
    fn default() -> Self {
        Self::new()
    }
}

fn matches_query(result: &SearchResult, lower_query: &str) -> bool {
    result.title.to_lowercase().contains(lower_query)
        || result.description.to_lowercase().contains(lower_query)
        || result.url.to_lowercase().contains(lower_query)
}
