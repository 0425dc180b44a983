//! Static translation catalogs.

use super::Locale;

type Catalog = &'static [(&'static str, &'static str)];

const EN: Catalog = &[
    ("title", "Website trust lookup"),
    ("inputHelp", "Enter a domain or URL to see its trust score and the signals behind it."),
    ("placeholder", "example.com"),
    ("view", "View"),
    ("examples", "Examples"),
    ("apiDocs", "API docs"),
    ("apiHealth", "API health"),
    ("invalidInput", "Please enter a valid domain or URL."),
    ("site", "Site"),
    ("loading", "Loading…"),
    ("updatedAt", "Updated at"),
    ("security", "Security"),
    ("credibility", "Credibility"),
    ("transparency", "Transparency"),
    ("community", "Community"),
    ("noVotes", "(no votes yet)"),
    ("gsbAlert", "Google Safe Browsing has flagged this site as potentially dangerous."),
    ("communityVote", "Community vote"),
    ("label", "Label"),
    ("reason", "Reason"),
    ("safe", "Safe"),
    ("suspicious", "Suspicious"),
    ("danger", "Dangerous"),
    ("submit", "Submit"),
    ("submitting", "Submitting…"),
    ("voteFailed", "Vote failed"),
];

const ZH: Catalog = &[
    ("title", "网站可信度查询"),
    ("inputHelp", "输入域名或网址，查看其可信度评分及依据。"),
    ("view", "查看"),
    ("examples", "示例"),
    ("apiDocs", "API 文档"),
    ("apiHealth", "API 状态"),
    ("invalidInput", "请输入有效的域名或网址。"),
    ("site", "站点"),
    ("loading", "加载中…"),
    ("updatedAt", "更新时间"),
    ("security", "安全性"),
    ("credibility", "可信度"),
    ("transparency", "透明度"),
    ("community", "社区"),
    ("noVotes", "（暂无投票）"),
    ("gsbAlert", "Google 安全浏览已将此网站标记为潜在危险。"),
    ("communityVote", "社区投票"),
    ("label", "标签"),
    ("reason", "理由"),
    ("safe", "安全"),
    ("suspicious", "可疑"),
    ("danger", "危险"),
    ("submit", "提交"),
    ("submitting", "提交中…"),
    ("voteFailed", "投票失败"),
];

const ZH_HANT: Catalog = &[
    ("title", "網站可信度查詢"),
    ("inputHelp", "輸入網域或網址，查看其可信度評分及依據。"),
    ("view", "查看"),
    ("examples", "範例"),
    ("apiDocs", "API 文件"),
    ("apiHealth", "API 狀態"),
    ("invalidInput", "請輸入有效的網域或網址。"),
    ("site", "網站"),
    ("loading", "載入中…"),
    ("updatedAt", "更新時間"),
    ("security", "安全性"),
    ("credibility", "可信度"),
    ("transparency", "透明度"),
    ("community", "社群"),
    ("noVotes", "（尚無投票）"),
    ("gsbAlert", "Google 安全瀏覽已將此網站標記為潛在危險。"),
    ("communityVote", "社群投票"),
    ("label", "標籤"),
    ("reason", "理由"),
    ("safe", "安全"),
    ("suspicious", "可疑"),
    ("danger", "危險"),
    ("submit", "送出"),
    ("submitting", "送出中…"),
    ("voteFailed", "投票失敗"),
];

const JA: Catalog = &[
    ("title", "ウェブサイト信頼度チェック"),
    ("inputHelp", "ドメインまたは URL を入力すると、信頼スコアと根拠を表示します。"),
    ("view", "表示"),
    ("examples", "例"),
    ("apiDocs", "API ドキュメント"),
    ("apiHealth", "API ステータス"),
    ("invalidInput", "有効なドメインまたは URL を入力してください。"),
    ("site", "サイト"),
    ("loading", "読み込み中…"),
    ("updatedAt", "更新日時"),
    ("security", "セキュリティ"),
    ("credibility", "信頼性"),
    ("transparency", "透明性"),
    ("community", "コミュニティ"),
    ("noVotes", "（投票なし）"),
    ("gsbAlert", "Google セーフ ブラウジングがこのサイトを危険の可能性ありと判定しています。"),
    ("communityVote", "コミュニティ投票"),
    ("label", "ラベル"),
    ("reason", "理由"),
    ("safe", "安全"),
    ("suspicious", "不審"),
    ("danger", "危険"),
    ("submit", "送信"),
    ("submitting", "送信中…"),
    ("voteFailed", "投票に失敗しました"),
];

const ES: Catalog = &[
    ("title", "Consulta de confianza de sitios web"),
    ("inputHelp", "Introduce un dominio o URL para ver su puntuación de confianza y las señales que la respaldan."),
    ("placeholder", "ejemplo.com"),
    ("view", "Ver"),
    ("examples", "Ejemplos"),
    ("apiDocs", "Documentación de la API"),
    ("apiHealth", "Estado de la API"),
    ("invalidInput", "Introduce un dominio o URL válido."),
    ("site", "Sitio"),
    ("loading", "Cargando…"),
    ("updatedAt", "Actualizado"),
    ("security", "Seguridad"),
    ("credibility", "Credibilidad"),
    ("transparency", "Transparencia"),
    ("community", "Comunidad"),
    ("noVotes", "(sin votos todavía)"),
    ("gsbAlert", "Google Safe Browsing ha marcado este sitio como potencialmente peligroso."),
    ("communityVote", "Voto de la comunidad"),
    ("label", "Etiqueta"),
    ("reason", "Motivo"),
    ("safe", "Seguro"),
    ("suspicious", "Sospechoso"),
    ("danger", "Peligroso"),
    ("submit", "Enviar"),
    ("submitting", "Enviando…"),
    ("voteFailed", "El voto ha fallado"),
];

fn catalog(locale: Locale) -> Catalog {
    match locale {
        Locale::En => EN,
        Locale::Zh => ZH,
        Locale::ZhHant => ZH_HANT,
        Locale::Ja => JA,
        Locale::Es => ES,
    }
}

fn lookup(catalog: Catalog, key: &str) -> Option<&'static str> {
    catalog.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

/// Translates `key` for `locale`.
///
/// Falls back to the English string, then to the key itself; never fails.
pub fn translate(key: &str, locale: Locale) -> &str {
    lookup(catalog(locale), key)
        .or_else(|| lookup(EN, key))
        .unwrap_or(key)
}
