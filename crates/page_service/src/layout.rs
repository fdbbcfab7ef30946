//! Shared page chrome: document shell and navigation bar.

/// Identifies which navigation entry is highlighted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivePage {
    Dashboard,
    Register,
    Reports,
    Appointments,
}

const NAV_ITEMS: [(ActivePage, &str, &str); 4] = [
    (ActivePage::Dashboard, "/", "Inicio"),
    (ActivePage::Register, "/register", "Registro"),
    (ActivePage::Reports, "/reports", "Reportes"),
    (ActivePage::Appointments, "/appointments", "Citas"),
];

const STYLES: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; background: #f6f8f7; color: #1f2d27; }
nav { display: flex; gap: 1rem; padding: 1rem 2rem; background: #2f6f4f; }
nav a { color: #e6f2ec; text-decoration: none; }
nav a.active { color: #ffffff; font-weight: 600; border-bottom: 2px solid #ffffff; }
main { max-width: 960px; margin: 2rem auto; padding: 0 1rem; }
.videos { display: grid; grid-template-columns: repeat(auto-fill, minmax(220px, 1fr)); gap: 1rem; }
.video img { width: 100%; border-radius: 6px; }
"#;

fn navigation(active: ActivePage) -> String {
    NAV_ITEMS
        .iter()
        .map(|(page, href, label)| {
            let class = if *page == active { r#" class="active""# } else { "" };
            format!(r#"<a href="{href}"{class}>{label}</a>"#)
        })
        .collect::<Vec<_>>()
        .join("\n    ")
}

/// Wrap page content in the shared document shell
pub fn render_page(title: &str, active: ActivePage, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="es">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{title} | Portal de Bienestar</title>
  <style>{STYLES}</style>
</head>
<body>
  <nav>
    {nav}
  </nav>
  <main>
    <h1>{title}</h1>
    {content}
  </main>
</body>
</html>"#,
        nav = navigation(active),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_entry_is_highlighted() {
        let html = render_page("Citas", ActivePage::Appointments, "<p>hola</p>");
        assert!(html.contains(r#"<a href="/appointments" class="active">Citas</a>"#));
        assert!(html.contains(r#"<a href="/">Inicio</a>"#));
        assert!(html.contains("<title>Citas | Portal de Bienestar</title>"));
        assert!(html.contains("<p>hola</p>"));
    }

    #[test]
    fn exactly_one_entry_is_active() {
        let html = render_page("Inicio", ActivePage::Dashboard, "");
        assert_eq!(html.matches(r#"class="active""#).count(), 1);
    }
}
