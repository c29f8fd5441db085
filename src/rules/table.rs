//! The migration itself: every rewrite applied to the pipeline service, in order.
//!
//! Each rule sees the buffer as left by the rules above it. A rule that names
//! others in `after` relies on their output (or is shadowed by it), so moving it
//! above them is rejected when the table is compiled.

use crate::rules::types::ReplacementRule;

const GET_SDR_NAME_BODY: &str = concat!(
	"  // Se for o funil \"SDR\" principal (nome é exatamente \"SDR\")\n",
	"  if (pipeline.name.toLowerCase().trim() === 'sdr') {\n",
	"    return 'SDR Geral';\n",
	"  }\n",
	"\n",
	"  // Extrai o nome do SDR removendo \"- SDR\" ou \"-SDR\"\n",
	"  const name = pipeline.name\n",
	r"    .replace(/\s*-\s*SDR\s*/i, '')",
	"\n",
	"    .trim();\n",
	"  \n",
	"  return name || pipeline.name;",
);

const GET_CLOSER_NAME_BODY: &str = concat!(
	"  // Se for o funil \"SDR\" principal\n",
	"  if (pipeline.isMainSDR) {\n",
	"    return 'SDR Geral';\n",
	"  }\n",
	"\n",
	"  // Se for um funil individual de CLOSER, extrai o nome\n",
	"  if (pipeline.isIndividualCloser) {\n",
	"    // Extrai o nome do CLOSER removendo \"CLOSER -\" ou \"CLOSER-\"\n",
	"    const name = pipeline.name\n",
	r"      .replace(/\s*CLOSER\s*-\s*/i, '')",
	"\n",
	"      .trim();\n",
	"    \n",
	"    return name || pipeline.name;\n",
	"  }\n",
	"\n",
	"  return pipeline.name;",
);

const OLD_PRIORITY_DOC: &str = concat!(
	" * TEM PERFIL = 1 (maior prioridade)\n",
	" * PERFIL MENOR = 2\n",
	" * INCONCLUSIVO = 3\n",
	" * SEM PERFIL = 4 (menor prioridade)",
);

const NEW_PRIORITY_DOC: &str = concat!(
	" * LEAD FORMULÁRIO = 1 (maior prioridade)\n",
	" * LEAD CHATBOX = 2\n",
	" * LEAD INSTAGRAM = 3\n",
	" * ÁUREA FINAL = 4\n",
	" * FABIO FINAL = 5 (menor prioridade)",
);

const OLD_PRIORITY_CHECKS: &str = concat!(
	"  if (name.includes('TEM PERFIL')) return 1;\n",
	"  if (name.includes('PERFIL MENOR')) return 2;\n",
	"  if (name.includes('INCONCLUSIVO')) return 3;\n",
	"  if (name.includes('SEM PERFIL')) return 4;",
);

const NEW_PRIORITY_CHECKS: &str = concat!(
	"  if (name.includes('LEAD FORMULÁRIO') || name.includes('LEAD FORMULARIO')) return 1;\n",
	"  if (name.includes('LEAD CHATBOX')) return 2;\n",
	"  if (name.includes('LEAD INSTAGRAM')) return 3;\n",
	"  if (name.includes('ÁUREA FINAL') || name.includes('AUREA FINAL')) return 4;\n",
	"  if (name.includes('FABIO FINAL')) return 5;",
);

const OLD_SDR_LOG: &str = concat!(
	"  // Log dos pipelines SDR encontrados\n",
	"  const sdrPipelines = pipelines.filter(p => p.isSDR);\n",
	"  if (sdrPipelines.length > 0) {\n",
	"    console.log('📋 Pipelines SDR encontrados:');\n",
	"    sdrPipelines.forEach(p => console.log(`   - ${p.name} (ID: ${p.id})`));\n",
	"  }",
);

const NEW_SDR_AND_CLOSER_LOG: &str = concat!(
	"  // Log dos pipelines SDR encontrados\n",
	"  const sdrPipelines = pipelines.filter(p => p.isSDR);\n",
	"  if (sdrPipelines.length > 0) {\n",
	"    console.log('📋 Pipelines SDR (principal) encontrados:');\n",
	"    sdrPipelines.forEach(p => console.log(`   - ${p.name} (ID: ${p.id})`));\n",
	"  }\n",
	"  \n",
	"  // Log dos pipelines CLOSER encontrados\n",
	"  const closerPipelines = pipelines.filter(p => p.isIndividualCloser);\n",
	"  if (closerPipelines.length > 0) {\n",
	"    console.log('📋 Pipelines CLOSER encontrados:');\n",
	"    closerPipelines.forEach(p => console.log(`   - ${p.name} (ID: ${p.id})`));\n",
	"  }",
);

const LIST_SDR_PIPELINES: &str = concat!(
	"export async function listSDRPipelines(): Promise<PipelineInfo[]> {\n",
	"  await loadPipedriveData();\n",
	"  \n",
	"  if (!pipelinesCache) return [];\n",
	"  \n",
	"  return Array.from(pipelinesCache.values()).filter(p => p.isSDR);\n",
	"}",
);

const LIST_SDR_AND_CLOSER_PIPELINES: &str = concat!(
	"export async function listSDRPipelines(): Promise<PipelineInfo[]> {\n",
	"  await loadPipedriveData();\n",
	"  \n",
	"  if (!pipelinesCache) return [];\n",
	"  \n",
	"  return Array.from(pipelinesCache.values()).filter(p => p.isSDR);\n",
	"}\n",
	"\n",
	"/**\n",
	" * Lista todos os pipelines CLOSER (individuais)\n",
	" */\n",
	"export async function listCloserPipelines(): Promise<PipelineInfo[]> {\n",
	"  await loadPipedriveData();\n",
	"  \n",
	"  if (!pipelinesCache) return [];\n",
	"  \n",
	"  return Array.from(pipelinesCache.values()).filter(p => p.isIndividualCloser);\n",
	"}",
);

/// The ordered rule table.
pub const RULES: &[ReplacementRule] = &[
	ReplacementRule::literal(
		"field-declaration",
		"isIndividualSDR: boolean",
		"isIndividualCloser: boolean",
	),
	ReplacementRule::literal(
		"field-comment",
		"// true se é funil individual \"NOME - SDR\"",
		"// true se é funil individual \"CLOSER - NOME\"",
	),
	ReplacementRule::literal(
		"individual-detection",
		"const isIndividualSDR = nameLower.includes('- sdr') || nameLower.includes('-sdr'); // \"NOME - SDR\"",
		"const isIndividualCloser = nameLower.includes('closer -') || nameLower.includes('closer-'); // \"CLOSER - NOME\"",
	),
	ReplacementRule::literal(
		"main-sdr-only",
		"isSDR: isMainSDR || isIndividualSDR,",
		"isSDR: isMainSDR, // Apenas o funil principal SDR",
	),
	// Broad rename; the narrower spellings above must already be gone.
	ReplacementRule::literal("individual-identifier", "isIndividualSDR", "isIndividualCloser")
		.after(&["field-declaration", "individual-detection", "main-sdr-only"]),
	// Shadowed by individual-identifier; kept so the table mirrors the migration.
	ReplacementRule::literal(
		"individual-predicate",
		"isIndividualSDRPipeline",
		"isIndividualCloserPipeline",
	)
	.after(&["individual-identifier"]),
	ReplacementRule::literal("name-placeholder", "\"NOME - SDR\"", "\"CLOSER - NOME\"")
		.after(&["field-comment", "individual-detection"]),
	ReplacementRule::literal("example-name", "João - SDR", "CLOSER - João"),
	ReplacementRule::regex(
		"drop-is-sdr-guard",
		r"  if \(!pipeline\.isSDR\) \{\s+return pipeline\.name;\s+\}",
		"",
	)
	.multiline(),
	ReplacementRule::literal("closer-name-extraction", GET_SDR_NAME_BODY, GET_CLOSER_NAME_BODY),
	ReplacementRule::literal("priority-doc", OLD_PRIORITY_DOC, NEW_PRIORITY_DOC),
	ReplacementRule::literal("priority-checks", OLD_PRIORITY_CHECKS, NEW_PRIORITY_CHECKS),
	ReplacementRule::literal("pipeline-logs", OLD_SDR_LOG, NEW_SDR_AND_CLOSER_LOG),
	ReplacementRule::literal(
		"list-closer-pipelines",
		LIST_SDR_PIPELINES,
		LIST_SDR_AND_CLOSER_PIPELINES,
	)
	.unless_present("export async function listCloserPipelines("),
	ReplacementRule::literal(
		"is-sdr-doc",
		" * Verifica se um pipeline é de SDR (nome contém \"- SDR\" ou é \"SDR\")",
		" * Verifica se um pipeline é de SDR (funil principal)",
	),
	// Shadowed by example-name.
	ReplacementRule::literal(
		"name-extraction-doc",
		" * Extrai o nome do SDR do nome do pipeline\n * Ex: \"João - SDR\" → \"João\"",
		" * Extrai o nome do CLOSER do nome do pipeline\n * Ex: \"CLOSER - João\" → \"João\"",
	)
	.after(&["example-name"]),
	// Shadowed by name-placeholder.
	ReplacementRule::literal(
		"individual-predicate-doc",
		" * Verifica se é um funil individual de SDR \"NOME - SDR\" (leads atendidos)",
		" * Verifica se é um funil individual de CLOSER \"CLOSER - NOME\" (leads atendidos)",
	)
	.after(&["name-placeholder"]),
	ReplacementRule::literal(
		"list-sdr-doc",
		" * Lista todos os pipelines SDR",
		" * Lista todos os pipelines SDR (principal)",
	)
	.unless_present(" * Lista todos os pipelines SDR (principal)"),
];

#[cfg(test)]
mod tests {
	use super::*;
	use crate::rules::rewriter::{apply, compile_rules};
	use std::collections::HashSet;

	#[test]
	fn test_table_compiles() {
		let compiled = compile_rules(RULES).unwrap();
		assert_eq!(compiled.len(), RULES.len());
	}

	#[test]
	fn test_rule_names_are_unique() {
		let names: HashSet<_> = RULES.iter().map(|r| r.name).collect();
		assert_eq!(names.len(), RULES.len());
	}

	#[test]
	fn test_field_declaration_renamed() {
		let input = "interface PipelineInfo {\n  isIndividualSDR: boolean;\n}\n";
		let output = apply(input, RULES).unwrap();
		assert!(output.contains("isIndividualCloser: boolean"));
		assert!(!output.contains("isIndividualSDR: boolean"));
	}

	#[test]
	fn test_name_placeholders_flip_order() {
		let input = "// \"NOME - SDR\"\n * Ex: João - SDR\n";
		let output = apply(input, RULES).unwrap();
		assert!(output.contains("\"CLOSER - NOME\""));
		assert!(output.contains("CLOSER - João"));
		assert!(!output.contains("SDR\""));
	}

	#[test]
	fn test_priority_checks_remapped() {
		let input = format!("{}\n  return 99;\n", OLD_PRIORITY_CHECKS);
		let output = apply(&input, RULES).unwrap();

		assert!(output.contains(
			"if (name.includes('LEAD FORMULÁRIO') || name.includes('LEAD FORMULARIO')) return 1;"
		));
		assert!(output.contains("if (name.includes('LEAD CHATBOX')) return 2;"));
		assert!(output.contains("if (name.includes('LEAD INSTAGRAM')) return 3;"));
		assert!(output.contains(
			"if (name.includes('ÁUREA FINAL') || name.includes('AUREA FINAL')) return 4;"
		));
		assert!(output.contains("if (name.includes('FABIO FINAL')) return 5;"));
		assert!(!output.contains("TEM PERFIL"));
		assert!(!output.contains("SEM PERFIL"));
		assert_eq!(output.matches(" return ").count(), 6);
	}

	#[test]
	fn test_guard_clause_removed() {
		let input = "  if (!pipeline.isSDR) {\n    return pipeline.name;\n  }\n\n  next();\n";
		let output = apply(input, RULES).unwrap();
		assert_eq!(output, "\n\n  next();\n");
	}

	#[test]
	fn test_list_sdr_doc_does_not_stack() {
		let input = "/**\n * Lista todos os pipelines SDR\n */\n";
		let once = apply(input, RULES).unwrap();
		let twice = apply(&once, RULES).unwrap();
		assert_eq!(once, "/**\n * Lista todos os pipelines SDR (principal)\n */\n");
		assert_eq!(once, twice);
	}

	#[test]
	fn test_list_closer_pipelines_added_once() {
		let once = apply(LIST_SDR_PIPELINES, RULES).unwrap();
		let twice = apply(&once, RULES).unwrap();
		assert_eq!(once, LIST_SDR_AND_CLOSER_PIPELINES);
		assert_eq!(twice.matches("function listCloserPipelines").count(), 1);
	}
}
