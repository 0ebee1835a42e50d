// every open dialog gets its own full-viewport layer; the layer is also the backdrop,
// and its z-index comes from the entry's position in the stack
pub const MODAL_STYLES: &str = r#"
.modal-host:focus {
  outline: none;
}

.modal-layer {
  position: fixed;
  inset: 0;
  display: flex;
  align-items: center;
  justify-content: center;
  padding: var(--space-4);
}

.modal-backdrop {
  background-color: var(--scrim);
}

.modal-backdrop-active {
  background-color: var(--scrim-active);
}

.modal-dialog {
  display: flex;
  flex-direction: column;
  width: 100%;
  max-height: calc(100vh - 2 * var(--space-8));
  background-color: var(--surface);
  border-radius: var(--radius-lg);
  box-shadow: var(--shadow-lg);
  transition: opacity var(--transition-fast) var(--easing-standard),
              transform var(--transition-fast) var(--easing-standard);
}

.modal-dialog-inactive {
  opacity: 0.6;
  transform: scale(0.96);
}

.modal-size-sm { max-width: 400px; }
.modal-size-md { max-width: 560px; }
.modal-size-lg { max-width: 720px; }
.modal-size-xl { max-width: 960px; }
.modal-size-2xl { max-width: 1200px; }
.modal-size-full { max-width: 95vw; }

.modal-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: var(--space-4) var(--space-6);
  border-bottom: 1px solid var(--border);
}

.modal-title {
  font-size: 1.125rem;
  font-weight: 600;
}

.btn-close {
  background: none;
  border: none;
  font-size: 1.5rem;
  line-height: 1;
  cursor: pointer;
  color: var(--text-tertiary);
}

.modal-body {
  padding: var(--space-6);
  overflow-y: auto;
}

.modal-footer {
  display: flex;
  gap: var(--space-3);
  justify-content: flex-end;
  padding: var(--space-4) var(--space-6);
  border-top: 1px solid var(--border);
}

.modal-placeholder {
  color: var(--text-tertiary);
}

/* Confirmation layout */
.confirmation-content {
  display: flex;
  gap: var(--space-4);
  align-items: flex-start;
}

.confirmation-icon {
  flex: none;
  width: 40px;
  height: 40px;
  border-radius: 9999px;
  display: flex;
  align-items: center;
  justify-content: center;
  font-weight: 700;
  color: var(--text-inverse);
}

.confirmation-icon.variant-danger { background-color: var(--error); }
.confirmation-icon.variant-warning { background-color: var(--warning); }
.confirmation-icon.variant-info { background-color: var(--info); }

.confirmation-buttons {
  display: flex;
  gap: var(--space-3);
  justify-content: flex-end;
  margin-top: var(--space-6);
}
"#;
