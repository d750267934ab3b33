//! Page CSS styles
//!
//! Styling for the optimizer forms, allocation card and chart.
//! Uses CSS custom properties (variables) for theming.

pub const STYLES: &str = r"
* { box-sizing: border-box; margin: 0; padding: 0; }

:root {
    --bg: #0d1117;
    --card: #161b22;
    --border: #30363d;
    --text: #c9d1d9;
    --text-dim: #8b949e;
    --green: #3fb950;
    --red: #f85149;
    --blue: #58a6ff;
}

body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    background: var(--bg);
    color: var(--text);
    padding: 20px;
    min-height: 100vh;
}

.container { max-width: 1200px; margin: 0 auto; }

/* Header */
header {
    margin-bottom: 24px;
    padding-bottom: 16px;
    border-bottom: 1px solid var(--border);
}

h1 { font-size: 24px; font-weight: 600; }

.subtitle { font-size: 13px; color: var(--text-dim); margin-top: 4px; }

/* Grid Layout */
.grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
    gap: 16px;
}

.wide { grid-column: 1 / -1; }

/* Cards */
.card {
    background: var(--card);
    border: 1px solid var(--border);
    border-radius: 12px;
    padding: 20px;
}

.card-header {
    font-size: 14px;
    color: var(--text-dim);
    text-transform: uppercase;
    letter-spacing: 0.5px;
    margin-bottom: 16px;
}

.card-title { font-size: 16px; font-weight: 600; margin-bottom: 12px; }
.card-subtitle { font-size: 12px; color: var(--text-dim); text-transform: uppercase; margin: 12px 0 6px; }
.card-text { font-size: 14px; margin-top: 8px; }

/* Forms */
.optimizer-form .field { margin-bottom: 12px; }

.optimizer-form label {
    display: block;
    font-size: 11px;
    color: var(--text-dim);
    text-transform: uppercase;
    margin-bottom: 4px;
}

.optimizer-form input {
    width: 100%;
    padding: 8px 10px;
    border-radius: 6px;
    border: 1px solid var(--border);
    background: var(--bg);
    color: var(--text);
    font-size: 13px;
}

/* Buttons */
.btn {
    padding: 8px 16px;
    border-radius: 6px;
    border: none;
    font-size: 13px;
    font-weight: 500;
    cursor: pointer;
    transition: all 0.2s;
}

.btn-primary { background: var(--blue); color: #fff; }
.btn-primary:hover { background: #4c9aed; }

/* Allocation list */
.list-group { list-style: none; margin-top: 8px; }

.list-group-item {
    padding: 8px 0;
    border-bottom: 1px solid var(--border);
    font-size: 14px;
}

.list-group-item:last-child { border-bottom: none; }

.performance-panel {
    background: rgba(88, 166, 255, 0.1);
    border-radius: 8px;
    padding: 12px;
    margin-top: 12px;
}

.error-panel { margin-top: 12px; }
.text-danger { color: var(--red); }

.alert {
    border-radius: 8px;
    padding: 12px 16px;
    font-size: 14px;
}

.alert-danger {
    background: rgba(248, 81, 73, 0.15);
    border: 1px solid var(--red);
    color: var(--red);
}

.chart-container { min-height: 350px; }

/* Responsive */
@media (max-width: 600px) {
    .grid { grid-template-columns: 1fr; }
}
";
