//! HTML parsing.
//!
//! Turns a fetched page into [`TableRow`]s. Only `<tr>`/`<td>` structure is
//! interpreted here; what each column means is decided by the application
//! layer. The match-centre pages are read into [`FixtureSection`]s and
//! [`MatchPage`]s by their CSS classes.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::domain::{
    Badge, CellImage, CellLink, FixtureCard, FixtureSection, MatchOverview, MatchPage, StatLine,
    TableCell, TableRow,
};

static ROW: LazyLock<Selector> = LazyLock::new(|| selector("tr"));
static ANCHOR: LazyLock<Selector> = LazyLock::new(|| selector("a"));
static IMAGE: LazyLock<Selector> = LazyLock::new(|| selector("img"));
static BOLD: LazyLock<Selector> = LazyLock::new(|| selector("b"));

static SECTION: LazyLock<Selector> = LazyLock::new(|| selector(".col-lg-12.mb-5"));
static SECTION_TITLE: LazyLock<Selector> = LazyLock::new(|| selector(".box-header h1"));
static SECTION_IMAGE: LazyLock<Selector> = LazyLock::new(|| selector(".box-header img"));
static CARD: LazyLock<Selector> = LazyLock::new(|| selector(".detail"));
static CARD_DATE: LazyLock<Selector> =
    LazyLock::new(|| selector(".match-date, .match-date-live"));
static CARD_HOME: LazyLock<Selector> = LazyLock::new(|| selector(".team-name-left .name"));
static CARD_HOME_IMAGE: LazyLock<Selector> = LazyLock::new(|| selector(".team-name-left img"));
static CARD_AWAY: LazyLock<Selector> = LazyLock::new(|| selector(".team-name-right .name"));
static CARD_AWAY_IMAGE: LazyLock<Selector> = LazyLock::new(|| selector(".team-name-right img"));
static CARD_SCORE: LazyLock<Selector> = LazyLock::new(|| selector(".vs"));
static CARD_LINK: LazyLock<Selector> = LazyLock::new(|| selector(".view-btn a"));

static OVERVIEW: LazyLock<[Selector; 4]> = LazyLock::new(|| {
    [1, 2, 3, 4].map(|n| selector(&format!(".detail-info .col-md-3:nth-child({n}) .main-color")))
});
static STAT_ROW: LazyLock<Selector> = LazyLock::new(|| selector(".detail-card .row"));
static STAT_NAME: LazyLock<Selector> = LazyLock::new(|| selector(".col-12.text-center"));
static STAT_HOME: LazyLock<Selector> = LazyLock::new(|| selector(".col-md-6:first-child b"));
static STAT_AWAY: LazyLock<Selector> = LazyLock::new(|| selector(".col-md-6:last-child b"));
static STAT_HOME_BAR: LazyLock<Selector> = LazyLock::new(|| selector(".progress-bar.bg-danger"));
static STAT_AWAY_BAR: LazyLock<Selector> =
    LazyLock::new(|| selector(".progress-bar.bg-secondary"));
static H2H_TABLE: LazyLock<Selector> =
    LazyLock::new(|| selector("table.table.table-striped.table-hover.mt-5"));
static STRIPED_ROW: LazyLock<Selector> = LazyLock::new(|| selector(".table-striped.table-hover tr"));
static STANDINGS_LEAGUE: LazyLock<Selector> = LazyLock::new(|| selector("#tab5 .team .name h5"));
static STANDINGS_LOGO: LazyLock<Selector> = LazyLock::new(|| selector("#tab5 .team img"));
static STANDINGS_FOOTER: LazyLock<Selector> = LazyLock::new(|| selector("#tab5 .col-12:last-child"));

fn selector(css: &str) -> Selector {
    Selector::parse(css).unwrap_or_else(|_| unreachable!("static selector {css}"))
}

/// Parse every table row in `html`, in document order.
///
/// Rows without `<td>` children (header rows) yield an empty cell list.
/// Malformed markup is tolerated; the parser never fails.
#[must_use]
pub fn parse_table_rows(html: &str) -> Vec<TableRow> {
    let document = Html::parse_document(html);
    document.select(&ROW).map(parse_row).collect()
}

fn parse_row(row: ElementRef<'_>) -> TableRow {
    let cells = row
        .children()
        .filter_map(ElementRef::wrap)
        .filter(|el| el.value().name() == "td")
        .map(parse_cell)
        .collect();

    let emphasized: String = row.select(&BOLD).map(element_text).collect();
    let emphasized = emphasized.trim();

    TableRow {
        cells,
        emphasized: (!emphasized.is_empty()).then(|| emphasized.to_string()),
    }
}

fn parse_cell(cell: ElementRef<'_>) -> TableCell {
    let links = cell
        .select(&ANCHOR)
        .map(|a| CellLink {
            text: element_text(a).trim().to_string(),
            href: a.value().attr("href").map(str::to_owned),
        })
        .collect();

    let image = cell.select(&IMAGE).next().map(|img| CellImage {
        src: img.value().attr("src").map(str::to_owned),
        title: img.value().attr("title").map(str::to_owned),
    });

    TableCell {
        text: element_text(cell).trim().to_string(),
        links,
        image,
    }
}

fn element_text(el: ElementRef<'_>) -> String {
    el.text().collect()
}

/// Trimmed text of every match of `sel` under `scope`, concatenated.
fn select_text(scope: ElementRef<'_>, sel: &Selector) -> String {
    scope
        .select(sel)
        .map(element_text)
        .collect::<String>()
        .trim()
        .to_string()
}

fn select_attr(scope: ElementRef<'_>, sel: &Selector, attr: &str) -> Option<String> {
    scope
        .select(sel)
        .next()
        .and_then(|el| el.value().attr(attr))
        .map(str::to_owned)
}

fn non_empty(text: String) -> Option<String> {
    (!text.is_empty()).then_some(text)
}

/// Parse the league blocks of a fixture listing page, in document order.
#[must_use]
pub fn parse_fixture_sections(html: &str) -> Vec<FixtureSection> {
    let document = Html::parse_document(html);
    document
        .select(&SECTION)
        .map(|section| FixtureSection {
            league: Badge {
                name: select_text(section, &SECTION_TITLE),
                image: select_attr(section, &SECTION_IMAGE, "src"),
            },
            cards: section.select(&CARD).map(parse_card).collect(),
        })
        .collect()
}

fn parse_card(card: ElementRef<'_>) -> FixtureCard {
    FixtureCard {
        date_text: select_text(card, &CARD_DATE),
        home: Badge {
            name: select_text(card, &CARD_HOME),
            image: select_attr(card, &CARD_HOME_IMAGE, "src"),
        },
        away: Badge {
            name: select_text(card, &CARD_AWAY),
            image: select_attr(card, &CARD_AWAY_IMAGE, "src"),
        },
        score: select_text(card, &CARD_SCORE),
        link: select_attr(card, &CARD_LINK, "href"),
    }
}

/// Parse a match page: overview, statistics, standings header and the rows
/// of its striped tables.
#[must_use]
pub fn parse_match_page(html: &str) -> MatchPage {
    let document = Html::parse_document(html);
    let root = document.root_element();
    let [date, league, venue, referee] = &*OVERVIEW;

    MatchPage {
        overview: MatchOverview {
            date: select_text(root, date),
            league: select_text(root, league),
            venue: select_text(root, venue),
            referee: select_text(root, referee),
        },
        statistics: root.select(&STAT_ROW).filter_map(parse_stat).collect(),
        league: Badge {
            name: select_text(root, &STANDINGS_LEAGUE),
            image: select_attr(root, &STANDINGS_LOGO, "src"),
        },
        standings_footer: select_text(root, &STANDINGS_FOOTER),
        head_to_head_rows: document
            .select(&H2H_TABLE)
            .next()
            .map(|table| table.select(&ROW).map(parse_row).collect()),
        table_rows: document.select(&STRIPED_ROW).map(parse_row).collect(),
    }
}

/// A statistic row; values fall back to the progress bar, then to `"0"`.
fn parse_stat(row: ElementRef<'_>) -> Option<StatLine> {
    let name = non_empty(select_text(row, &STAT_NAME))?;
    let value = |text: &Selector, bar: &Selector| {
        non_empty(select_text(row, text))
            .or_else(|| select_attr(row, bar, "aria-valuenow"))
            .unwrap_or_else(|| "0".to_string())
    };
    Some(StatLine {
        name,
        home: value(&STAT_HOME, &STAT_HOME_BAR),
        away: value(&STAT_AWAY, &STAT_AWAY_BAR),
    })
}
