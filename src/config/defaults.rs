use crate::config::types::{RuleFile, RuleSpec};
use std::path::PathBuf;

/// Directory walked when neither `--root` nor the rule file names one.
pub const DEFAULT_ROOT: &str = "src/modules";

/// Suffix of candidate files when neither `--ext` nor the rule file names one.
pub const DEFAULT_EXTENSION: &str = ".ts";

/// Matches the part of an import statement that precedes the path,
/// including the opening quote:
/// `from '`, `import '`, `import('`, `require('`, `jest.mock('`.
const IMPORT_PREFIX: &str = r#"((?:\bfrom|\bimport)\s+['"]|\b(?:require|import|jest\.mock)\(\s*['"])"#;

/// Modules that moved under a domain group, keyed by the group directory.
///
/// Files live at `<group>/<module>/<layer>/file.ts` after the move, so a
/// former sibling import `../<module>/` now needs three levels up plus the
/// group of the target module.
const MOVED_MODULES: &[(&str, &[&str])] = &[
	("infraestrutura", &["email", "auditoria", "common"]),
	("autenticacao", &["auth", "perfil", "usuarios"]),
	(
		"cadastros",
		&["empresas", "pacientes", "profissionais", "unidade-saude"],
	),
	(
		"relacionamento",
		&[
			"convenios",
			"fornecedores",
			"laboratorios",
			"prestadores-servico",
			"telemedicina",
		],
	),
	("atendimento", &["agendas", "caixa", "fila-atendimento"]),
];

/// The built-in rule table.
///
/// One rule per group rewrites `../<module>/` into
/// `../../../<group>/<module>/`. The last rule fixes imports that already
/// name a group but are one level too shallow (`../../<group>/`).
/// No replacement here produces text that any pattern matches again.
pub fn default_rules() -> Vec<RuleSpec> {
	let mut rules: Vec<RuleSpec> = MOVED_MODULES
		.iter()
		.map(|(group, modules)| {
			RuleSpec::new(
				format!(r#"{IMPORT_PREFIX}\.\./({})([/'"])"#, alternation(modules)),
				format!("${{1}}../../../{group}/${{2}}${{3}}"),
			)
		})
		.collect();

	let groups: Vec<&str> = MOVED_MODULES.iter().map(|(group, _)| *group).collect();
	rules.push(RuleSpec::new(
		format!(r#"{IMPORT_PREFIX}\.\./\.\./({})([/'"])"#, alternation(&groups)),
		"${1}../../../${2}${3}",
	));

	rules
}

fn alternation(names: &[&str]) -> String {
	names
		.iter()
		.map(|name| regex::escape(name))
		.collect::<Vec<_>>()
		.join("|")
}

/// Render a `.relink.toml` that spells out the given settings.
pub fn render_rule_file(
	rules: &[RuleSpec],
	root: &str,
	extension: &str,
) -> Result<String, toml::ser::Error> {
	let file = RuleFile {
		root: Some(PathBuf::from(root)),
		extension: Some(extension.to_string()),
		rules: rules.to_vec(),
	};

	let body = toml::to_string(&file)?;
	Ok(format!(
		"# relink rule file\n\
		 # Rules run top to bottom on every candidate file; order matters.\n\
		 # Replacement templates use `$1` / `${{name}}` for capture groups.\n\n\
		 {body}"
	))
}

/// Template written by `relink --init`.
pub fn generate_init_template() -> Result<String, toml::ser::Error> {
	render_rule_file(&default_rules(), DEFAULT_ROOT, DEFAULT_EXTENSION)
}
