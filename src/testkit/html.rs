//! HTML fixtures shaped like the listing and team profile pages.

/// One listing row.
#[derive(Debug, Clone)]
pub struct ListingRow {
    pub odds: String,
    pub league: String,
    pub schedule: String,
    pub home: String,
    pub away: String,
    pub confidence: String,
    /// Team rendered in bold, if any.
    pub emphasized: Option<String>,
    /// Render the up-arrow price marker in the match cell.
    pub price_up: bool,
}

impl ListingRow {
    pub fn new(home: &str, away: &str, schedule: &str, odds: &str, confidence: u32) -> Self {
        Self {
            odds: odds.to_string(),
            league: "E0".to_string(),
            schedule: schedule.to_string(),
            home: home.to_string(),
            away: away.to_string(),
            confidence: confidence.to_string(),
            emphasized: None,
            price_up: false,
        }
    }

    pub fn league(mut self, league: &str) -> Self {
        self.league = league.to_string();
        self
    }

    pub fn emphasize(mut self, team: &str) -> Self {
        self.emphasized = Some(team.to_string());
        self
    }

    pub fn price_up(mut self) -> Self {
        self.price_up = true;
        self
    }

    fn team_anchor(&self, name: &str) -> String {
        let text = if self.emphasized.as_deref() == Some(name) {
            format!("<b>{name}</b>")
        } else {
            name.to_string()
        };
        format!(r#"<a href="{}">{text}</a>"#, team_path(name))
    }

    fn to_html(&self) -> String {
        format!(
            r#"<tr>
  <td>•</td>
  <td>{odds}</td>
  <td><img src="/img/flags/{league}.png" title="{schedule}, {league} round"> <a href="/league/{league}">{league}</a></td>
  <td>{home} - {away}{marker}</td>
  <td>{confidence}</td>
  <td>1.95</td>
  <td>1.90</td>
  <td>-3%</td>
  <td>1.88</td>
  <td>1.70</td>
  <td>WDW</td>
</tr>"#,
            odds = self.odds,
            league = self.league,
            schedule = self.schedule,
            home = self.team_anchor(&self.home),
            away = self.team_anchor(&self.away),
            marker = if self.price_up { " <font>⬆️</font>" } else { "" },
            confidence = self.confidence,
        )
    }
}

/// Site-relative profile path for a team.
pub fn team_path(name: &str) -> String {
    format!("/team/{}", name.replace(' ', "-"))
}

/// A listing page with a header row followed by `rows`.
pub fn listing_page(rows: &[ListingRow]) -> String {
    let body: String = rows.iter().map(ListingRow::to_html).collect();
    format!(
        "<html><body><table>\n<tr><th></th><th>Odds</th><th>League</th><th>Match</th><th>Conf</th></tr>\n{body}\n</table></body></html>"
    )
}

/// A team profile page carrying a `Team Ratings (H/A)` row.
pub fn profile_page(home: &str, away: &str) -> String {
    format!(
        "<html><body><table>\n\
         <tr><td>Matches played</td><td>28</td></tr>\n\
         <tr><td>Team Ratings (H/A)</td><td>{home}</td><td>{away}</td></tr>\n\
         </table></body></html>"
    )
}

/// A profile page without a ratings row.
pub fn profile_page_without_ratings() -> String {
    "<html><body><table><tr><td>Matches played</td><td>28</td></tr></table></body></html>"
        .to_string()
}

/// One fixture card on the match-centre listing.
#[derive(Debug, Clone)]
pub struct FixtureCardHtml {
    pub id: String,
    pub kickoff: String,
    pub home: String,
    pub away: String,
    pub score: String,
}

impl FixtureCardHtml {
    pub fn new(id: &str, kickoff: &str, home: &str, away: &str) -> Self {
        Self {
            id: id.to_string(),
            kickoff: kickoff.to_string(),
            home: home.to_string(),
            away: away.to_string(),
            score: "vs".to_string(),
        }
    }

    fn to_html(&self) -> String {
        format!(
            r#"<div class="detail">
  <span class="match-date">{kickoff}</span>
  <div class="team-name-left"><img src="/img/{home}.png"><span class="name">{home}</span></div>
  <div class="vs">{score}</div>
  <div class="team-name-right"><img src="/img/{away}.png"><span class="name">{away}</span></div>
  <div class="view-btn"><a href="/football/match/{id}">View</a></div>
</div>"#,
            kickoff = self.kickoff,
            home = self.home,
            away = self.away,
            score = self.score,
            id = self.id,
        )
    }
}

/// A fixture listing page with one block per `(league, cards)`.
pub fn fixtures_page(leagues: &[(&str, Vec<FixtureCardHtml>)]) -> String {
    let body: String = leagues
        .iter()
        .map(|(league, cards)| {
            let cards: String = cards.iter().map(FixtureCardHtml::to_html).collect();
            format!(
                r#"<div class="col-lg-12 mb-5"><div class="box-header"><img src="/img/{league}.png"><h1>{league}</h1></div>{cards}</div>"#
            )
        })
        .collect();
    format!("<html><body>{body}</body></html>")
}

/// A match page with an overview, one statistic, a head-to-head table of
/// `meetings` (competition, date, home, score, away, result), a two-team
/// league table and the standings footer `*อัพเดต่าสุด : <updated>`.
pub fn match_page(meetings: &[[&str; 6]], updated: &str) -> String {
    let h2h: String = meetings
        .iter()
        .map(|m| {
            format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td><button>{}</button></td></tr>",
                m[0], m[1], m[2], m[3], m[4], m[5]
            )
        })
        .collect();
    format!(
        r#"<html><body>
<div class="detail-info">
  <div class="col-md-3"><span class="main-color">15/03/2025 20:00</span></div>
  <div class="col-md-3"><span class="main-color">Premier League</span></div>
  <div class="col-md-3"><span class="main-color">Emirates Stadium</span></div>
  <div class="col-md-3"><span class="main-color">M. Oliver</span></div>
</div>
<div class="detail-card">
  <div class="row">
    <div class="col-12 text-center">Possession</div>
    <div class="values"><div class="col-md-6"><b>58</b></div><div class="col-md-6"><b>42</b></div></div>
  </div>
</div>
<table class="table table-striped table-hover mt-5">
  <tr><th>Competition</th><th>Date</th><th>Home</th><th>Score</th><th>Away</th><th>Result</th></tr>
  {h2h}
</table>
<div id="tab5">
  <div class="team"><img src="/img/epl.png"><div class="name"><h5>Premier League</h5></div></div>
  <table class="table table-striped table-hover">
    <tr><th>#</th><th>Team</th><th>P</th><th>W</th><th>D</th><th>L</th><th>F</th><th>A</th><th>GD</th><th>Pts</th></tr>
    <tr><td>1</td><td><img src="/img/ars.png"><span>Arsenal</span></td><td>28</td><td>20</td><td>5</td><td>3</td><td>60</td><td>20</td><td>40</td><td>65</td></tr>
    <tr><td>2</td><td><img src="/img/che.png"><span>Chelsea</span></td><td>28</td><td>18</td><td>6</td><td>4</td><td>55</td><td>25</td><td>30</td><td>60</td></tr>
  </table>
  <div class="row"><div class="col-12">*อัพเดต่าสุด : {updated}</div></div>
</div>
</body></html>"#
    )
}

/// A match page without a head-to-head table.
pub fn match_page_without_head_to_head() -> String {
    "<html><body><div class=\"detail-info\"></div></body></html>".to_string()
}
