//! Fixed welcome email, personalized with the recipient's display name.

const HTML_BEFORE_NAME: &str = r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>Hello from Mail Service!</title>
  <style>
    body {
      font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
      line-height: 1.6;
      color: #333;
      max-width: 600px;
      margin: 0 auto;
      padding: 20px;
      background-color: #f4f4f4;
    }
    .email-container {
      background-color: white;
      padding: 30px;
      border-radius: 10px;
      box-shadow: 0 2px 10px rgba(0,0,0,0.1);
    }
    .header {
      text-align: center;
      margin-bottom: 30px;
    }
    .header h1 {
      color: #4CAF50;
      margin: 0;
      font-size: 28px;
    }
    .greeting {
      font-size: 18px;
      margin-bottom: 20px;
    }
    .content {
      margin-bottom: 20px;
    }
    .highlight {
      background-color: #e8f5e8;
      padding: 15px;
      border-left: 4px solid #4CAF50;
      margin: 20px 0;
      border-radius: 0 5px 5px 0;
    }
    .footer {
      text-align: center;
      margin-top: 30px;
      padding-top: 20px;
      border-top: 1px solid #eee;
      color: #666;
      font-size: 14px;
    }
  </style>
</head>
<body>
  <div class="email-container">
    <div class="header">
      <h1>🎉 Welcome!</h1>
    </div>

    <div class="greeting">
      Hello "#;

const HTML_AFTER_NAME: &str = r#"! 👋
    </div>

    <div class="content">
      <p>Thank you for trying out our Mail Service application! This is an automated introductory email to let you know that everything is working perfectly.</p>

      <div class="highlight">
        <strong>🚀 What is Mail Service?</strong><br>
        Mail Service is a simple yet powerful application that allows you to send personalized emails programmatically. It's built with modern web technologies and designed to be easy to use and customize.
      </div>

      <p><strong>Features include:</strong></p>
      <ul>
        <li>✅ Simple web interface for sending emails</li>
        <li>✅ Personalized email templates</li>
        <li>✅ Support for both HTML and plain text emails</li>
        <li>✅ Error handling and validation</li>
        <li>✅ Responsive design that works on all devices</li>
      </ul>

      <p>Whether you're testing email functionality, sending welcome messages, or just exploring how email automation works, this service has got you covered!</p>
    </div>

    <div class="footer">
      <p>This email was sent automatically by Mail Service.</p>
      <p>Built with ❤️ using Rust, axum, and lettre</p>
      <p><small>If you received this email in error, you can safely ignore it.</small></p>
    </div>
  </div>
</body>
</html>
"#;

const TEXT_BEFORE_NAME: &str = "Hello ";

const TEXT_AFTER_NAME: &str = "!

Thank you for trying out our Mail Service application! This is an automated introductory email to let you know that everything is working perfectly.

What is Mail Service?
Mail Service is a simple yet powerful application that allows you to send personalized emails programmatically. It's built with modern web technologies and designed to be easy to use and customize.

Features include:
- Simple web interface for sending emails
- Personalized email templates
- Support for both HTML and plain text emails
- Error handling and validation
- Responsive design that works on all devices

Whether you're testing email functionality, sending welcome messages, or just exploring how email automation works, this service has got you covered!

---
This email was sent automatically by Mail Service.
Built with love using Rust, axum, and lettre

If you received this email in error, you can safely ignore it.
";

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

pub fn render_html(name: &str) -> String {
    format!("{HTML_BEFORE_NAME}{}{HTML_AFTER_NAME}", html_escape(name))
}

pub fn render_text(name: &str) -> String {
    format!("{TEXT_BEFORE_NAME}{name}{TEXT_AFTER_NAME}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rendering_is_deterministic() {
        assert_eq!(render_html("Sam"), render_html("Sam"));
        assert_eq!(render_text("Sam"), render_text("Sam"));
    }

    #[test]
    fn greets_by_name() {
        assert!(render_html("Sam").contains("Hello Sam! 👋"));
        assert!(render_text("Sam").starts_with("Hello Sam!\n"));
    }

    #[test]
    fn placeholder_name_appears_in_both_bodies() {
        assert!(render_html("there").contains("Hello there!"));
        assert!(render_text("there").contains("Hello there!"));
    }

    #[test]
    fn empty_name_still_renders() {
        assert!(render_html("").contains("Hello ! 👋"));
        assert!(render_text("").starts_with("Hello !"));
    }

    #[test]
    fn html_body_escapes_markup_in_name() {
        let html = render_html("<script>alert('x')</script> & \"co\"");

        assert!(!html.contains("<script>"));
        assert!(html.contains(
            "Hello &lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt; &amp; &quot;co&quot;!"
        ));
    }

    #[test]
    fn text_body_keeps_name_verbatim() {
        assert!(render_text("<b>Sam</b>").starts_with("Hello <b>Sam</b>!"));
    }
}
