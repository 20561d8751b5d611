use crate::service::TaskList;

pub fn render_index(listing: &TaskList) -> String {
    let mut body = String::new();
    body.push_str(
        r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <title>100 days</title>
  <style>
    :root {
      color-scheme: light;
      font-family: "Inter", system-ui, -apple-system, sans-serif;
      background: #f4f5f7;
    }
    body {
      margin: 0;
      padding: 32px;
      display: flex;
      justify-content: center;
    }
    .app {
      width: min(720px, 100%);
      background: #ffffff;
      border-radius: 16px;
      box-shadow: 0 24px 48px rgba(15, 23, 42, 0.08);
      padding: 28px;
    }
    h1 {
      margin: 0 0 16px 0;
      font-size: 28px;
      letter-spacing: -0.02em;
    }
    .subtitle {
      color: #64748b;
      margin-bottom: 24px;
    }
    form {
      display: flex;
      gap: 12px;
      margin-bottom: 24px;
    }
    input[type="text"] {
      flex: 1;
      padding: 12px 14px;
      border-radius: 10px;
      border: 1px solid #e2e8f0;
      font-size: 15px;
    }
    button {
      border: none;
      border-radius: 10px;
      padding: 12px 16px;
      background: #111827;
      color: white;
      font-weight: 600;
      cursor: pointer;
    }
    .task-list {
      display: grid;
      gap: 12px;
    }
    .task {
      display: flex;
      align-items: center;
      justify-content: space-between;
      padding: 12px 16px;
      border-radius: 12px;
      background: #f8fafc;
      border: 1px solid #e2e8f0;
    }
    .task .meta {
      display: flex;
      flex-direction: column;
      gap: 4px;
    }
    .task .name {
      font-weight: 600;
    }
    .task .streak {
      font-size: 12px;
      color: #94a3b8;
    }
    .status {
      font-size: 12px;
      text-transform: uppercase;
      letter-spacing: 0.08em;
      color: #0f172a;
      background: #e2e8f0;
      padding: 4px 8px;
      border-radius: 999px;
    }
    .status.done {
      background: #dcfce7;
      color: #166534;
    }
    .actions {
      display: flex;
      align-items: center;
      gap: 8px;
    }
    .actions form {
      margin: 0;
    }
    .actions button {
      background: #e2e8f0;
      color: #0f172a;
      font-weight: 600;
      padding: 8px 12px;
    }
    .actions button.delete {
      background: #fee2e2;
      color: #991b1b;
    }
  </style>
</head>
<body>
  <div class="app">
    <h1>100 days</h1>
"#,
    );

    body.push_str(&format!(
        "    <div class=\"subtitle\">One small habit a day. Today is {today}.</div>\n",
        today = listing.today
    ));

    body.push_str(
        r#"    <form method="post" action="/add">
      <input type="text" name="task_name" placeholder="New habit" />
      <button type="submit">Add</button>
    </form>
    <div class="task-list">
"#,
    );

    if listing.tasks.is_empty() {
        body.push_str("<div class=\"subtitle\">No habits yet. Add your first one!</div>");
    } else {
        for task in &listing.tasks {
            let status_class = if task.completed_today { "status done" } else { "status" };
            let status_label = if task.completed_today { "Done today" } else { "Open" };
            let toggle_label = if task.completed_today { "Undo" } else { "Done" };
            body.push_str(&format!(
                r#"<div class="task">
  <div class="meta">
    <div class="name">{name}</div>
    <div class="streak">Since {created} &middot; {total} days done</div>
  </div>
  <div class="actions">
    <span class="{status_class}">{status_label}</span>
    <form method="post" action="/complete/{id}">
      <button type="submit">{toggle_label}</button>
    </form>
    <form method="post" action="/delete/{id}">
      <button class="delete" type="submit">Delete</button>
    </form>
  </div>
</div>"#,
                name = html_escape(&task.name),
                created = task.created_at,
                total = task.total_completions,
                id = task.id,
                status_class = status_class,
                status_label = status_label,
                toggle_label = toggle_label
            ));
        }
    }

    body.push_str(
        r#"    </div>
  </div>
</body>
</html>"#,
    );

    body
}

fn html_escape(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TaskView;

    #[test]
    fn escapes_task_names() {
        let listing = TaskList {
            tasks: vec![TaskView {
                id: "abc".to_string(),
                name: "<script>alert('x')</script>".to_string(),
                created_at: "2026-03-14".to_string(),
                completed_today: false,
                total_completions: 0,
            }],
            today: "2026-03-14".to_string(),
        };
        let html = render_index(&listing);
        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn shows_today_and_actions() {
        let listing = TaskList {
            tasks: vec![TaskView {
                id: "abc".to_string(),
                name: "stretch".to_string(),
                created_at: "2026-03-01".to_string(),
                completed_today: true,
                total_completions: 7,
            }],
            today: "2026-03-14".to_string(),
        };
        let html = render_index(&listing);
        assert!(html.contains("2026-03-14"));
        assert!(html.contains("/complete/abc"));
        assert!(html.contains("/delete/abc"));
        assert!(html.contains("7 days done"));
        assert!(html.contains("Done today"));
    }
}
