use maud::{html, Markup, PreEscaped, DOCTYPE};

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; color: #222; background: #fafafa; }
header { display: flex; align-items: center; gap: 0.75rem; padding: 0.75rem 1.5rem; background: #fff; box-shadow: 0 1px 3px rgba(0,0,0,.08); }
header h3 { margin: 0; }
main.container { max-width: 1100px; margin: 0 auto; padding: 1.5rem; }
section.filters { background: #fff; border-radius: 8px; padding: 1rem; margin-bottom: 1rem; }
.btn { display: inline-block; padding: 0.35rem 0.8rem; border: 1px solid #d4d4d8; border-radius: 6px; color: inherit; text-decoration: none; background: #fff; }
.btn.selected { background: #524ed2; border-color: #524ed2; color: #fff; }
.btn.disabled { opacity: 0.4; pointer-events: none; }
.region-grid { display: grid; grid-template-columns: repeat(6, 1fr); gap: 0.4rem; }
.cards { display: grid; grid-template-columns: repeat(auto-fill, minmax(300px, 1fr)); gap: 1rem; }
.card { background: #fff; border-radius: 8px; padding: 1rem; box-shadow: 0 1px 3px rgba(0,0,0,.08); }
.card h2 { font-size: 1.1rem; margin: 0 0 0.5rem; }
.badge { font-size: 0.85rem; color: #555; }
.summary { font-size: 0.9rem; color: #444; }
.notice { padding: 1rem; border-radius: 8px; background: #fff; text-align: center; color: #666; }
.notice.error { background: #fef2f2; color: #b91c1c; text-align: left; }
.pagination { display: flex; justify-content: center; align-items: center; gap: 1rem; margin-top: 2rem; }
iframe { width: 100%; height: 32rem; border: 1px solid #e4e4e7; border-radius: 8px; }
"#;

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="ko" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(STYLE)) }
            }
            body {
              header {
                  svg
                      xmlns="http://www.w3.org/2000/svg"
                      width="24"
                      height="24"
                      viewBox="0 0 24 24"
                      fill="none"
                      stroke="#524ed2"
                      stroke-width="2"
                      stroke-linecap="round"
                      stroke-linejoin="round"
                      class="icon icon-tabler icon-tabler-home"
                  {
                      path stroke="none" d="M0 0h24v24H0z" fill="none" {}
                      path d="M5 12l-2 0l9 -9l9 9l-2 0" {}
                      path d="M5 12v7a2 2 0 0 0 2 2h10a2 2 0 0 0 2 -2v-7" {}
                      path d="M9 21v-6a2 2 0 0 1 2 -2h2a2 2 0 0 1 2 2v6" {}
                  }
                  h3 { a href="/" style="color: inherit; text-decoration: none;" { "청약 분양정보" } }
              }
                (content)
            }
        }
    }
}
