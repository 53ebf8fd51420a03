//! Global CSS for the Inkstream desktop app.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --paper: #faf7f2;
  --paper-card: #ffffff;
  --paper-border: #e6e0d6;

  --ink: #1f2328;
  --ink-soft: rgba(31, 35, 40, 0.72);
  --ink-muted: rgba(31, 35, 40, 0.5);

  --accent: #2f6f4f;
  --accent-soft: rgba(47, 111, 79, 0.15);

  --danger: #b3382c;
  --warning: #b07a1e;
}

* { box-sizing: border-box; margin: 0; padding: 0; }

body {
  background: var(--paper);
  color: var(--ink);
  font-family: Georgia, 'Times New Roman', serif;
  line-height: 1.6;
}

a { color: var(--accent); text-decoration: none; }
a:hover { text-decoration: underline; }

/* === Navigation header === */
.nav-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 0.75rem 1.5rem;
  border-bottom: 1px solid var(--paper-border);
  background: var(--paper-card);
}
.nav-title { font-size: 1.4rem; font-weight: bold; color: var(--ink); }
.nav-links { display: flex; gap: 1rem; align-items: center; }
.nav-link { color: var(--ink-soft); font-size: 0.95rem; }
.nav-link.active { color: var(--accent); font-weight: bold; }
.nav-error {
  padding: 0.4rem 1.5rem;
  background: rgba(179, 56, 44, 0.1);
  color: var(--danger);
  font-size: 0.85rem;
}

/* === Page scaffolding === */
.page { max-width: 960px; margin: 0 auto; padding: 1.5rem; }
.page-title { font-size: 1.8rem; margin-bottom: 1rem; }
.section-title { font-size: 1.2rem; margin: 1.5rem 0 0.75rem; color: var(--ink-soft); }

.loading-state, .error-state, .empty-state {
  text-align: center;
  padding: 3rem 1rem;
  color: var(--ink-muted);
}
.error-state { color: var(--danger); }

.spinner {
  width: 28px; height: 28px;
  margin: 0 auto 0.75rem;
  border: 3px solid var(--paper-border);
  border-top-color: var(--accent);
  border-radius: 50%;
  animation: spin 0.8s linear infinite;
}
@keyframes spin { to { transform: rotate(360deg); } }

/* === Cards === */
.post-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(280px, 1fr));
  gap: 1.25rem;
}
.post-card {
  background: var(--paper-card);
  border: 1px solid var(--paper-border);
  border-radius: 8px;
  overflow: hidden;
  display: flex;
  flex-direction: column;
}
.post-card-image { width: 100%; height: 160px; object-fit: cover; }
.post-card-body { padding: 1rem; flex: 1; }
.post-card-title { font-size: 1.1rem; margin-bottom: 0.4rem; }
.post-card-excerpt { color: var(--ink-soft); font-size: 0.9rem; }
.post-card-footer {
  padding: 0.6rem 1rem;
  border-top: 1px solid var(--paper-border);
  display: flex;
  justify-content: space-between;
  align-items: center;
}

/* === Post stats (likes/saves) === */
.post-stats { display: flex; gap: 1rem; align-items: center; }
.stat-btn {
  background: none;
  border: none;
  cursor: pointer;
  font-size: 0.95rem;
  color: var(--ink-soft);
}
.stat-btn.active { color: var(--accent); font-weight: bold; }
.stat-btn:disabled { opacity: 0.4; cursor: default; }

/* === Forms === */
.form-card {
  max-width: 440px;
  margin: 2rem auto;
  padding: 2rem;
  background: var(--paper-card);
  border: 1px solid var(--paper-border);
  border-radius: 8px;
}
.form-wide { max-width: 720px; }
.form-error { color: var(--danger); margin: 0.5rem 0; font-size: 0.9rem; }
.form-hint { color: var(--ink-muted); font-size: 0.85rem; margin-top: 0.75rem; }

.field { display: block; margin-bottom: 1rem; }
.field-label { display: block; font-size: 0.85rem; color: var(--ink-soft); margin-bottom: 0.3rem; }
.field-input {
  width: 100%;
  padding: 0.5rem 0.7rem;
  border: 1px solid var(--paper-border);
  border-radius: 6px;
  background: var(--paper);
  color: var(--ink);
  font-family: inherit;
  font-size: 0.95rem;
}
.field-input:focus { outline: 2px solid var(--accent-soft); border-color: var(--accent); }
.field-textarea { resize: vertical; }

/* === Buttons === */
.btn-primary, .btn-danger, .btn-ghost {
  padding: 0.5rem 1.1rem;
  border-radius: 6px;
  border: 1px solid transparent;
  cursor: pointer;
  font-family: inherit;
  font-size: 0.95rem;
}
.btn-primary { background: var(--accent); color: #fff; }
.btn-primary:hover { filter: brightness(1.1); }
.btn-danger { background: none; border-color: var(--danger); color: var(--danger); }
.btn-ghost { background: none; border-color: var(--paper-border); color: var(--ink-soft); }
.btn-primary:disabled, .btn-danger:disabled, .btn-ghost:disabled { opacity: 0.5; cursor: default; }

/* === Comments === */
.comment-list { margin-top: 1rem; }
.comment-item {
  display: flex;
  gap: 0.75rem;
  padding: 0.75rem 0;
  border-bottom: 1px solid var(--paper-border);
}
.comment-meta { font-size: 0.8rem; color: var(--ink-muted); }
.comment-body { flex: 1; }
.comment-actions { display: flex; gap: 0.5rem; }

/* === Avatars & profiles === */
.avatar {
  border-radius: 50%;
  object-fit: cover;
  background: var(--accent-soft);
}
.avatar-fallback {
  border-radius: 50%;
  background: var(--accent-soft);
  color: var(--accent);
  display: inline-flex;
  align-items: center;
  justify-content: center;
  font-weight: bold;
}
.profile-card {
  display: flex;
  gap: 1.25rem;
  align-items: center;
  background: var(--paper-card);
  border: 1px solid var(--paper-border);
  border-radius: 8px;
  padding: 1.5rem;
  margin-bottom: 1.5rem;
}
.profile-name { font-size: 1.3rem; }
.profile-username { color: var(--ink-muted); }
.profile-bio { margin-top: 0.5rem; color: var(--ink-soft); }

.tab-row { display: flex; gap: 0.5rem; margin: 1rem 0; }

/* === Misc === */
.search-bar { display: flex; gap: 0.5rem; margin-bottom: 1.25rem; }
.search-bar input { flex: 1; }
.people-row { display: flex; flex-wrap: wrap; gap: 0.75rem; }
.person-chip {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0.4rem 0.8rem;
  background: var(--paper-card);
  border: 1px solid var(--paper-border);
  border-radius: 999px;
}
.post-content { margin-top: 1rem; white-space: pre-wrap; }
.post-hero-image { width: 100%; max-height: 380px; object-fit: cover; border-radius: 8px; }
.byline { color: var(--ink-muted); font-size: 0.9rem; margin-bottom: 1rem; }
"#;
