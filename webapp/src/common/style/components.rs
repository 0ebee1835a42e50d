pub const BASE_COMPONENTS: &str = r#"
/* Buttons */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  padding: var(--space-2) var(--space-4);
  border-radius: var(--radius-md);
  font-weight: 500;
  cursor: pointer;
  border: none;
  transition: background-color var(--transition-fast) var(--easing-standard);
}

.btn:disabled {
  opacity: 0.6;
  cursor: not-allowed;
}

.btn-primary {
  background-color: var(--primary);
  color: var(--text-inverse);
}

.btn-primary:hover {
  background-color: var(--primary-dark);
}

.btn-secondary {
  background-color: var(--neutral-200);
  color: var(--text-primary);
}

.btn-danger {
  background-color: var(--error);
  color: var(--text-inverse);
}

.btn-warning {
  background-color: var(--warning);
  color: var(--text-inverse);
}

.btn-small {
  padding: var(--space-1) var(--space-2);
  font-size: 0.875rem;
}

/* Forms */
.form-group {
  display: flex;
  flex-direction: column;
  gap: var(--space-1);
  margin-bottom: var(--space-4);
}

.form-label {
  font-weight: 500;
  color: var(--text-secondary);
}

.form-input, .form-textarea, .form-select {
  padding: var(--space-2) var(--space-3);
  border: 1px solid var(--border);
  border-radius: var(--radius-md);
  font: inherit;
}

.form-input:focus, .form-textarea:focus, .form-select:focus {
  outline: none;
  border-color: var(--border-focus);
}

.form-check {
  display: flex;
  align-items: center;
  gap: var(--space-2);
}

.form-error {
  color: var(--error);
  font-size: 0.875rem;
}

/* Tables */
.data-table {
  width: 100%;
  border-collapse: collapse;
  background-color: var(--surface);
  border-radius: var(--radius-lg);
  box-shadow: var(--shadow-sm);
}

.data-table th, .data-table td {
  padding: var(--space-2) var(--space-3);
  text-align: left;
  border-bottom: 1px solid var(--border);
}

.data-table th {
  color: var(--text-secondary);
  font-weight: 600;
}

.row-actions {
  display: flex;
  gap: var(--space-2);
  justify-content: flex-end;
}

.badge {
  padding: 2px var(--space-2);
  border-radius: 9999px;
  font-size: 0.75rem;
  background-color: var(--neutral-200);
}

.badge-success {
  background-color: #DCFCE7;
  color: var(--success);
}

.badge-danger {
  background-color: #FEE2E2;
  color: var(--error);
}

.form-hint {
  font-size: 0.75rem;
  color: var(--text-tertiary);
}

.status-message {
  margin: var(--space-2) 0;
  color: var(--text-secondary);
}

.status-error {
  color: var(--error);
}

.empty-state, .loading-state {
  padding: var(--space-8);
  text-align: center;
  color: var(--text-tertiary);
}

/* Toasts */
.toast-stack {
  position: fixed;
  right: var(--space-4);
  bottom: var(--space-4);
  z-index: 5000;
  display: flex;
  flex-direction: column;
  gap: var(--space-2);
}

.toast {
  min-width: 260px;
  padding: var(--space-3) var(--space-4);
  border-radius: var(--radius-md);
  color: var(--text-inverse);
  box-shadow: var(--shadow-lg);
  cursor: pointer;
}

.toast-success {
  background-color: var(--success);
}

.toast-error {
  background-color: var(--error);
}
"#;
