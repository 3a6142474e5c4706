/// A team (or league) listing index on the resale site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Team {
    pub name: &'static str,
    pub slug: &'static str,
}

/// Catalog of supported teams, in the order they are offered to the user.
pub const TEAMS: &[Team] = &[
    Team { name: "サッカー日本代表", slug: "national-team-soccer" },
    Team { name: "明治安田生命J1リーグ", slug: "meijiyasudaseimei-ji" },
    Team { name: "明治安田生命J2リーグ", slug: "meijiyasudaseimei-j2" },
    Team { name: "アビスパ福岡", slug: "avispa" },
    Team { name: "アルビレックス新潟", slug: "albirex" },
    Team { name: "浦和レッズ", slug: "reds" },
    Team { name: "ヴィッセル神戸", slug: "vissel-kobe" },
    Team { name: "FC東京", slug: "fctokyo" },
    Team { name: "FC町田ゼルビア", slug: "zelvia" },
    Team { name: "ガンバ大阪", slug: "gamba-osaka" },
    Team { name: "川崎フロンターレ", slug: "frontale" },
    Team { name: "鹿島アントラーズ", slug: "antlers" },
    Team { name: "柏レイソル", slug: "reysol" },
    Team { name: "京都サンガFC", slug: "sanga-fc" },
    Team { name: "湘南ベルマーレ", slug: "bellmare" },
    Team { name: "サガン鳥栖", slug: "sagan-tosu" },
    Team { name: "サンフレッチェ広島", slug: "sanfrecce" },
    Team { name: "セレッソ大阪", slug: "cerezo" },
    Team { name: "ジュビロ磐田", slug: "jubilo-iwata" },
    Team { name: "東京ヴェルディ", slug: "verdy" },
    Team { name: "北海道コンサドーレ札幌", slug: "consadole-sapporo" },
    Team { name: "名古屋グランパス", slug: "nagoya-grampus" },
    Team { name: "横浜F・マリノス", slug: "f-marinos" },
];

/// Finds a team by display name or slug.
pub fn find_team(name_or_slug: &str) -> Option<&'static Team> {
    let needle = name_or_slug.trim();
    TEAMS
        .iter()
        .find(|team| team.name == needle || team.slug == needle)
}
