use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};

use crate::{
    generations::{enums::generation_mode::GenerationMode, models::workflow_snapshot::WorkflowSnapshot},
    inputs::enums::cooking_style::CookingStyle,
};

const TITLE: &str = "นักปรุงฝัน";
const SUBTITLE: &str = "บอกวัตถุดิบ แล้วให้ AI ปรุงฝันให้คุณ";
const SUBMIT_LABEL: &str = "เสกสรรปั้นแต่ง!";
const SUBMIT_LOADING_LABEL: &str = "กำลังปรุง...";
const RECIPE_LABEL: &str = "สร้างสูตรอาหาร";
const RECIPE_LOADING_LABEL: &str = "กำลังเขียนสูตร...";
const ERROR_PREFIX: &str = "เกิดข้อผิดพลาด:";
const PLACEHOLDER: &str = "ผลงานของคุณจะปรากฏที่นี่";
const MENU_NAME_PLACEHOLDER: &str = "ชื่อเมนู";
const INSTRUCTIONS_PLACEHOLDER: &str = "วิธีทำ";
const SAVE_IMAGE_LABEL: &str = "🖼️ บันทึกรูปภาพ";
const SAVE_RECIPE_LABEL: &str = "📝 บันทึกสูตร";

const STYLE: &str = "
body { font-family: sans-serif; background: #fdf6ec; margin: 0; }
.app-container { max-width: 720px; margin: 0 auto; padding: 24px; }
.main-card, .recipe-card { background: #fff; border-radius: 12px; padding: 20px; margin-bottom: 16px; }
.form-group { display: flex; flex-direction: column; margin-bottom: 12px; }
.cauldron-container { min-height: 240px; display: flex; align-items: center; justify-content: center; }
.result-image-display { max-width: 100%; border-radius: 12px; }
.error-message, .validation-notice { color: #b00020; }
.recipe-card p { white-space: pre-line; }
button[disabled] { opacity: 0.6; cursor: progress; }
";

// __UNSAVED__, __LOADING__ and __STATUS__ are filled in per render.
const SHELL_SCRIPT: &str = "
(function () {
  var unsaved = __UNSAVED__;
  var loading = __LOADING__;
  function guard(event) { event.preventDefault(); event.returnValue = ''; }
  function release() { window.removeEventListener('beforeunload', guard); }
  if (unsaved) { window.addEventListener('beforeunload', guard); }
  document.querySelectorAll('form').forEach(function (form) { form.addEventListener('submit', release); });
  document.querySelectorAll('[data-shell-nav]').forEach(function (el) { el.addEventListener('click', release); });
  window.addEventListener('pagehide', release);
  if (loading) {
    var poll = setInterval(function () {
      fetch('/api/workflow')
        .then(function (res) { return res.json(); })
        .then(function (state) {
          if (state.status !== '__STATUS__') { clearInterval(poll); release(); window.location.reload(); }
        })
        .catch(function () {});
    }, 1500);
  }
})();
";

/// Server-side projection of the session.
///
/// `notice` is the blocking validation message for the last submit.
/// `navigating_exports` is set when export links reload the page (saves
/// into a directory) rather than trigger an in-place download.
pub fn render(
    snapshot: &WorkflowSnapshot,
    notice: Option<&str>,
    navigating_exports: bool,
) -> String {
    let loading = !snapshot.can_submit;

    let mut body = String::new();
    body.push_str(&render_form(snapshot, loading));
    if let Some(notice) = notice {
        body.push_str(&render_notice(notice));
    }

    body.push_str("<div class=\"result-section\">");
    body.push_str(&render_results(snapshot, loading));
    if snapshot.mode == GenerationMode::Split && snapshot.image.is_some() && snapshot.recipe.is_none()
    {
        body.push_str(&render_recipe_action(snapshot, loading));
    }
    if !loading {
        body.push_str(&render_recipe_card(snapshot, navigating_exports));
    }
    body.push_str("</div>");

    let script = SHELL_SCRIPT
        .replace("__UNSAVED__", bool_literal(snapshot.unsaved))
        .replace("__LOADING__", bool_literal(loading))
        .replace("__STATUS__", &snapshot.status);

    format!(
        "<!DOCTYPE html>\n<html lang=\"th\">\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n<style>{style}</style>\n</head>\n<body>\n<div class=\"app-container\">{body}</div>\n<script>{script}</script>\n</body>\n</html>\n",
        title = TITLE,
        style = STYLE,
        body = body,
        script = script,
    )
}

fn render_form(snapshot: &WorkflowSnapshot, loading: bool) -> String {
    let options: String = CookingStyle::ALL
        .iter()
        .map(|style| {
            let selected = match style.value() == snapshot.inputs.style {
                true => " selected",
                false => "",
            };
            format!(
                "<option value=\"{}\"{}>{}</option>",
                attr(style.value()),
                selected,
                text(style.label())
            )
        })
        .collect();

    format!(
        "<div class=\"main-card\">\
<h1 class=\"title\">{title}</h1>\
<p class=\"subtitle\">{subtitle}</p>\
<form id=\"creation-form\" action=\"/submit\" method=\"post\">\
<div class=\"form-group\"><label for=\"ingredients-input\">วัตถุดิบของคุณ:</label>\
<input id=\"ingredients-input\" name=\"ingredients\" type=\"text\" value=\"{ingredients}\" placeholder=\"เช่น เนื้อแกะ, โรสแมรี่, แสงจันทร์...\"></div>\
<div class=\"form-group\"><label for=\"quantity-input\">จำนวน/ปริมาณ:</label>\
<input id=\"quantity-input\" name=\"quantity\" type=\"text\" value=\"{quantity}\" placeholder=\"เช่น 2 ชิ้น, 1 กิโลกรัม, 1 ขวด...\"></div>\
<div class=\"form-group\"><label for=\"style-select\">เลือกสไตล์การปรุง:</label>\
<select id=\"style-select\" name=\"style\">{options}</select></div>\
<button id=\"submit-button\" type=\"submit\"{disabled}>{label}</button>\
</form></div>",
        title = TITLE,
        subtitle = SUBTITLE,
        ingredients = attr(&snapshot.inputs.ingredients),
        quantity = attr(&snapshot.inputs.quantity),
        options = options,
        disabled = disabled(loading),
        label = match loading {
            true => SUBMIT_LOADING_LABEL,
            false => SUBMIT_LABEL,
        },
    )
}

fn render_notice(notice: &str) -> String {
    // serde_json quoting gives a valid JS string literal
    let literal = serde_json::to_string(notice).unwrap_or("\"\"".to_string());

    format!(
        "<div class=\"validation-notice\" role=\"alert\">{}</div><script>alert({});</script>",
        text(notice),
        literal.replace("</", "<\\/")
    )
}

fn render_results(snapshot: &WorkflowSnapshot, loading: bool) -> String {
    let mut content = String::new();

    if loading {
        content.push_str("<div class=\"loader\" aria-busy=\"true\"></div>");
    }
    if let (false, Some(error)) = (loading, &snapshot.error) {
        content.push_str(&format!(
            "<div class=\"error-message\">{} <br/> {}</div>",
            ERROR_PREFIX,
            text(error)
        ));
    }
    if !loading && snapshot.error.is_none() && snapshot.image.is_none() {
        content.push_str(&format!(
            "<div class=\"placeholder\"><span>🍲</span><p>{}</p></div>",
            PLACEHOLDER
        ));
    }
    // an image stays on screen while its recipe is being written
    if let Some(image) = &snapshot.image {
        content.push_str(&format!(
            "<img src=\"{}\" alt=\"Generated food\" class=\"result-image-display\">",
            attr(&image.url)
        ));
    }

    let class = match loading {
        true => "cauldron-container loading",
        false => "cauldron-container",
    };

    format!("<div class=\"{}\">{}</div>", class, content)
}

fn render_recipe_action(snapshot: &WorkflowSnapshot, loading: bool) -> String {
    let label = match snapshot.status.as_str() {
        "generating_recipe" => RECIPE_LOADING_LABEL,
        _ => RECIPE_LABEL,
    };

    format!(
        "<form id=\"recipe-form\" action=\"/recipe\" method=\"post\"><button id=\"recipe-button\" type=\"submit\"{}>{}</button></form>",
        disabled(loading || !snapshot.can_request_recipe),
        label
    )
}

fn render_recipe_card(snapshot: &WorkflowSnapshot, navigating_exports: bool) -> String {
    let Some(recipe) = &snapshot.recipe else {
        return String::new();
    };

    let menu_name = match recipe.menu_name.is_empty() {
        true => MENU_NAME_PLACEHOLDER,
        false => recipe.menu_name.as_str(),
    };
    let instructions = match recipe.instructions.is_empty() {
        true => INSTRUCTIONS_PLACEHOLDER,
        false => recipe.instructions.as_str(),
    };
    let link_mode = match navigating_exports {
        true => " data-shell-nav",
        false => " download",
    };

    format!(
        "<div class=\"recipe-card\"><h2>{}</h2><p>{}</p>\
<div class=\"save-buttons-container\">\
<a class=\"save-button\" id=\"save-image\" href=\"/export/image\"{mode}>{}</a>\
<a class=\"save-button\" id=\"save-recipe\" href=\"/export/recipe\"{mode}>{}</a>\
</div></div>",
        text(menu_name),
        text(instructions),
        SAVE_IMAGE_LABEL,
        SAVE_RECIPE_LABEL,
        mode = link_mode,
    )
}

fn disabled(is_disabled: bool) -> &'static str {
    match is_disabled {
        true => " disabled",
        false => "",
    }
}

fn bool_literal(value: bool) -> &'static str {
    match value {
        true => "true",
        false => "false",
    }
}
