//! Static HTML rendering for the guest surface.
//!
//! The confirmation page shows the device name and remaining validity
//! with a single unlock button; pressing it POSTs back to the same URL.
//! Error pages carry only generic, guest-safe text.

/// Confirmation page with the unlock button and remaining-time display.
pub fn confirmation_page(display_name: &str, remaining_hours: i64, remaining_minutes: i64) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>Guest access</title>
  <style>
    * {{ box-sizing: border-box; }}
    body {{
      margin: 0;
      min-height: 100vh;
      display: flex;
      justify-content: center;
      align-items: center;
      font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
      background: linear-gradient(160deg, #8fb7ff, #c7a4ff);
      color: #ffffff;
    }}
    .card {{
      background: rgba(255, 255, 255, 0.08);
      border-radius: 24px;
      padding: 32px 24px 28px;
      width: 100%;
      max-width: 420px;
      box-shadow: 0 18px 45px rgba(0, 0, 0, 0.25);
      backdrop-filter: blur(18px);
      text-align: center;
    }}
    .title {{ font-size: 1.15rem; font-weight: 600; margin-bottom: 8px; }}
    .timer {{ font-size: 0.85rem; opacity: 0.95; margin-bottom: 28px; }}
    .timer span {{ font-weight: 600; }}
    .circle-button {{
      width: 180px;
      height: 180px;
      border-radius: 50%;
      border: none;
      background: #fff;
      color: #7b5cff;
      display: inline-flex;
      flex-direction: column;
      align-items: center;
      justify-content: center;
      cursor: pointer;
      box-shadow: 0 12px 30px rgba(0,0,0,0.20);
      transition: transform 0.12s ease;
    }}
    .circle-button:active {{ transform: scale(0.97); }}
    .circle-button.disabled {{ cursor: default; opacity: 0.85; }}
    .icon {{ font-size: 44px; margin-bottom: 8px; }}
    .label {{ font-size: 1.05rem; font-weight: 700; letter-spacing: 0.08em; }}
    .status-ok {{ color: #1EB980; }}
    .status-error {{ color: #FF5252; }}
    .status-progress {{ color: #7b5cff; }}
    .error-text {{ margin-top: 10px; min-height: 1.2em; font-size: 0.85rem; color: #FFE8E8; }}
    .hint {{ margin-top: 18px; font-size: 0.8rem; opacity: 0.85; }}
  </style>
</head>
<body>
  <div class="card">
    <div class="title">You have been given a temporary key for {display_name}</div>
    <div class="timer">Key valid for: <span>{remaining_hours}h {remaining_minutes}m</span></div>

    <button class="circle-button" id="open-btn">
      <div class="icon" id="btn-icon">&#128275;</div>
      <div class="label status-progress" id="btn-label">OPEN</div>
    </button>
    <div class="error-text" id="error-text"></div>

    <div class="hint">Keep this page open while the door is opening.</div>
  </div>

  <script>
    const btn = document.getElementById('open-btn');
    const icon = document.getElementById('btn-icon');
    const label = document.getElementById('btn-label');
    const errorText = document.getElementById('error-text');
    let resetTimeout = null;

    function setState(cls, iconText, labelText, err) {{
      icon.textContent = iconText;
      label.textContent = labelText;
      label.className = 'label ' + cls;
      errorText.textContent = err || '';
    }}

    async function handleClick() {{
      if (btn.classList.contains('disabled')) return;
      window.clearTimeout(resetTimeout);
      btn.classList.add('disabled');
      setState('status-progress', '⏳', 'OPENING...');

      try {{
        const resp = await fetch(window.location.href, {{ method: 'POST' }});
        const data = await resp.json();

        if (resp.ok && data.status === 'ok') {{
          setState('status-ok', '✅', 'OPEN');
          resetTimeout = window.setTimeout(() => {{
            btn.classList.remove('disabled');
            setState('status-progress', '\u{{1F513}}', 'OPEN');
          }}, 5000);
        }} else {{
          btn.classList.remove('disabled');
          setState('status-error', '❌', 'ERROR', data && data.message ? data.message : 'Could not open the door.');
        }}
      }} catch (err) {{
        btn.classList.remove('disabled');
        setState('status-error', '❌', 'ERROR', 'Connection error. Please try again.');
      }}
    }}

    btn.addEventListener('click', handleClick);
  </script>
</body>
</html>"#
    )
}

/// Terminal error page for invalid, expired, or misconfigured links.
pub fn error_page(title: &str, message: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>Guest access</title>
  <style>
    body {{
      margin: 0;
      min-height: 100vh;
      display: flex;
      justify-content: center;
      align-items: center;
      font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
      background: linear-gradient(160deg, #8fb7ff, #c7a4ff);
      color: #ffffff;
    }}
    .card {{
      background: rgba(255, 255, 255, 0.08);
      border-radius: 24px;
      padding: 32px 24px;
      max-width: 420px;
      box-shadow: 0 18px 45px rgba(0, 0, 0, 0.25);
      text-align: center;
    }}
    .title {{ font-size: 1.15rem; font-weight: 600; margin-bottom: 8px; }}
    .message {{ font-size: 0.9rem; opacity: 0.9; }}
  </style>
</head>
<body>
  <div class="card">
    <div class="title">{title}</div>
    <div class="message">{message}</div>
  </div>
</body>
</html>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirmation_page_shows_name_and_remaining_time() {
        let page = confirmation_page("Entrance door", 1, 0);
        assert!(page.contains("Entrance door"));
        assert!(page.contains("1h 0m"));
        assert!(page.contains("OPEN"));
    }

    #[test]
    fn error_page_carries_only_the_given_text() {
        let page = error_page("Link invalid", "The link has expired or was revoked.");
        assert!(page.contains("Link invalid"));
        assert!(page.contains("expired or was revoked"));
    }
}
