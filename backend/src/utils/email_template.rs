use crate::handlers::email_dtos::EmailData;

pub const DEFAULT_RECIPIENT_NAME: &str = "Valued Customer";
pub const DEFAULT_UPDATES_LINK: &str = "https://www.example.com/trivex-updates";

pub const DEFAULT_BODY_PARAGRAPHS: [&str; 2] = [
    "We're excited to share some important updates from Trivex.",
    "At Trivex, we continue to push the boundaries of technology, seamlessly integrating hardware and software to create innovative solutions. Our commitment to engineering synergy drives us to build the backbone of tomorrow's technology.",
];

// Inlined because most mail clients strip <link> stylesheets.
const GLOBAL_EMAIL_STYLES: &str = r#"
        body, html { margin: 0; padding: 0; -webkit-text-size-adjust: 100%; -ms-text-size-adjust: 100%; }
        table { border-collapse: collapse; mso-table-lspace: 0pt; mso-table-rspace: 0pt; }
        img { -ms-interpolation-mode: bicubic; border: 0; height: auto; line-height: 100%; outline: none; text-decoration: none; }
        a { text-decoration: none; color: #00FFFF; }
        h1, h2, h3, h4, h5, h6 { margin: 0; padding: 0; }
        p { margin: 0; padding: 0; }

        @media only screen and (max-width: 600px) {
            .full-width-table { width: 100% !important; }
            .col-width { display: block !important; width: 100% !important; }
            .padding-stack { padding-left: 20px !important; padding-right: 20px !important; }
            .text-center-mobile { text-align: center !important; }
        }
"#;

/// Escapes the characters that would let a submitted value open a tag or
/// close a double-quoted attribute. Apostrophes and ampersands stay literal
/// so names and query-string links come through as typed.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn body_paragraphs(content: Option<&str>) -> String {
    match non_empty(content) {
        Some(text) => format!(
            r#"<p style="margin-bottom: 15px; white-space: pre-line;">{}</p>"#,
            escape_html(text)
        ),
        None => DEFAULT_BODY_PARAGRAPHS
            .iter()
            .map(|p| format!(r#"<p style="margin-bottom: 15px;">{}</p>"#, escape_html(p)))
            .collect::<Vec<_>>()
            .join("\n                                    "),
    }
}

/// Renders the "Your Trivex Update" email as a standalone HTML document.
///
/// Missing or blank fields fall back to [`DEFAULT_RECIPIENT_NAME`],
/// [`DEFAULT_UPDATES_LINK`] and [`DEFAULT_BODY_PARAGRAPHS`].
pub fn render_update_email(data: &EmailData, year: i32) -> String {
    let recipient_name =
        escape_html(non_empty(Some(data.recipient_name.as_str())).unwrap_or(DEFAULT_RECIPIENT_NAME));
    let updates_link =
        escape_html(non_empty(Some(data.updates_link.as_str())).unwrap_or(DEFAULT_UPDATES_LINK));
    let body = body_paragraphs(data.content.as_deref());

    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <meta http-equiv="X-UA-Compatible" content="IE=edge">
    <title>Your Trivex Update</title>
    <style type="text/css">{styles}</style>
</head>
<body style="margin: 0; padding: 0; background-color: #f4f4f4; font-family: Arial, sans-serif; font-size: 16px; line-height: 1.6; color: #333333;">
    <table border="0" cellpadding="0" cellspacing="0" width="100%" style="background-color: #f4f4f4;">
        <tr>
            <td align="center" style="padding: 20px 0;">
                <table border="0" cellpadding="0" cellspacing="0" width="600" class="full-width-table" style="background-color: #ffffff; border-radius: 8px; overflow: hidden; box-shadow: 0 4px 12px rgba(0,0,0,0.05);">
                    <tr>
                        <td align="center" style="background-color: #030712; padding: 30px 20px;">
                            <h1 style="color: #FFFFFF; font-size: 28px; font-weight: bold; margin: 0;">TRIVEX</h1>
                            <p style="color: #00FFFF; font-size: 14px; margin-top: 5px;">Engineer Synergy</p>
                        </td>
                    </tr>
                    <tr>
                        <td style="padding: 40px; text-align: left;" class="padding-stack">
                            <h2 style="color: #00FFFF; font-size: 24px; margin-bottom: 20px;">Hello, {recipient_name}!</h2>
                                    {body}
                            <p style="margin-bottom: 25px;">You can learn more about our recent projects and insights by clicking the button below:</p>
                            <table border="0" cellpadding="0" cellspacing="0" style="margin: 0 auto;">
                                <tr>
                                    <td align="center" style="border-radius: 6px; background-color: #00FFFF; padding: 12px 25px;">
                                        <a href="{updates_link}" target="_blank" style="font-size: 18px; font-weight: bold; color: #030712; text-decoration: none; display: inline-block;">
                                            Explore Trivex
                                        </a>
                                    </td>
                                </tr>
                            </table>
                            <p style="margin-top: 30px;">Thank you for your continued interest and support in our mission.</p>
                            <p style="margin-top: 15px;">Best regards,</p>
                            <p style="font-weight: bold;">The Trivex Team</p>
                        </td>
                    </tr>
                    <tr>
                        <td align="center" style="background-color: #f0f0f0; padding: 30px 20px; border-top: 1px solid #eeeeee;">
                            <p style="font-size: 14px; color: #777777; margin-bottom: 10px;">&copy; {year} Trivex Inc. All rights reserved.</p>
                            <p style="font-size: 14px; color: #777777; margin-top: 5px;">From Silicon to Software&mdash;We Engineer Synergy.</p>
                            <table border="0" cellpadding="0" cellspacing="0" style="margin-top: 20px;">
                                <tr>
                                    <td style="padding: 0 10px;"><a href="#" style="color: #00FFFF; font-size: 14px;">Twitter</a></td>
                                    <td style="padding: 0 10px;"><a href="#" style="color: #00FFFF; font-size: 14px;">LinkedIn</a></td>
                                    <td style="padding: 0 10px;"><a href="#" style="color: #00FFFF; font-size: 14px;">GitHub</a></td>
                                </tr>
                            </table>
                        </td>
                    </tr>
                </table>
            </td>
        </tr>
    </table>
</body>
</html>
"##,
        styles = GLOBAL_EMAIL_STYLES,
        recipient_name = recipient_name,
        body = body,
        updates_link = updates_link,
        year = year,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data(name: &str, link: &str, content: Option<&str>) -> EmailData {
        EmailData {
            recipient_name: name.to_string(),
            updates_link: link.to_string(),
            content: content.map(str::to_string),
        }
    }

    #[test]
    fn greeting_and_link_are_interpolated() {
        let html = render_update_email(
            &data("Alice Johnson", "https://www.trivex.com/latest-news", None),
            2026,
        );

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("Hello, Alice Johnson!"));
        assert!(html.contains(r#"href="https://www.trivex.com/latest-news""#));
        assert!(html.contains("&copy; 2026 Trivex Inc."));
    }

    #[test]
    fn default_boilerplate_when_content_is_missing_or_blank() {
        for content in [None, Some(""), Some("   ")] {
            let html = render_update_email(&data("Alice", "https://t.co", content), 2026);
            assert!(html.contains("important updates from Trivex."));
            assert!(html.contains("build the backbone of tomorrow's technology."));
        }
    }

    #[test]
    fn custom_content_replaces_boilerplate() {
        let html = render_update_email(
            &data("Alice", "https://t.co", Some("CoreOS 2.0 ships next week.")),
            2026,
        );

        assert!(html.contains(">CoreOS 2.0 ships next week.</p>"));
        assert!(!html.contains("important updates from Trivex."));
    }

    #[test]
    fn blank_name_and_link_fall_back_to_defaults() {
        let html = render_update_email(&data("", " ", None), 2026);

        assert!(html.contains("Hello, Valued Customer!"));
        assert!(html.contains(DEFAULT_UPDATES_LINK));
    }

    #[test]
    fn markup_in_values_is_escaped() {
        let html = render_update_email(
            &data("<script>x</script>", r#"https://a.b/?q="><img"#, Some("1 < 2 & 3")),
            2026,
        );

        assert!(!html.contains("<script>x</script>"));
        assert!(html.contains("Hello, &lt;script&gt;x&lt;/script&gt;!"));
        assert!(html.contains(r#"href="https://a.b/?q=&quot;&gt;&lt;img""#));
        assert!(html.contains("1 &lt; 2 & 3"));
    }

    #[test]
    fn escape_leaves_plain_text_alone() {
        assert_eq!(escape_html("Alice Johnson"), "Alice Johnson");
        assert_eq!(escape_html("O'Brien & Co"), "O'Brien & Co");
    }

    #[test]
    fn apostrophe_name_and_query_link_stay_literal() {
        let html = render_update_email(
            &data("Conan O'Brien", "https://www.trivex.com/news?a=1&b=2", None),
            2026,
        );

        assert!(html.contains("Hello, Conan O'Brien!"));
        assert!(html.contains(r#"href="https://www.trivex.com/news?a=1&b=2""#));
    }
}
