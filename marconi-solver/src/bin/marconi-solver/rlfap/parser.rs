use fnv::FnvHashMap;
use fnv::FnvHashSet;
use marconi_solver::model::BinaryConstraint;
use marconi_solver::model::ConstraintModel;
use marconi_solver::model::ConstraintOp;

use super::error::RlfapError;

/// A constraint as it appears in a `ctr` file, referring to variables by their labels.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RawConstraint {
    pub(crate) a: i32,
    pub(crate) b: i32,
    pub(crate) constraint: BinaryConstraint,
}

/// Parses a `dom` file: per line a domain identifier, a value count, and the values.
///
/// A domain identifier occurring twice keeps its last definition.
pub(crate) fn parse_domains(source: &str) -> Result<FnvHashMap<i32, Vec<i32>>, RlfapError> {
    let mut domains = FnvHashMap::default();

    for (line, tokens) in content_lines(source) {
        if tokens.len() < 2 {
            return Err(RlfapError::MissingFields {
                line,
                expected: 2,
                actual: tokens.len(),
            });
        }

        let domain_id = parse_int(tokens[0], line)?;
        let expected = parse_int(tokens[1], line)? as usize;
        let values = tokens[2..]
            .iter()
            .map(|token| parse_int(token, line))
            .collect::<Result<Vec<_>, _>>()?;

        if values.len() != expected {
            return Err(RlfapError::WrongValueCount {
                line,
                expected,
                actual: values.len(),
            });
        }

        let _ = domains.insert(domain_id, values);
    }

    Ok(domains)
}

/// Parses a `var` file: per line a variable label and the identifier of its domain.
pub(crate) fn parse_variables(source: &str) -> Result<Vec<(i32, i32)>, RlfapError> {
    let mut variables = Vec::new();
    let mut seen = FnvHashSet::default();

    for (line, tokens) in content_lines(source) {
        if tokens.len() < 2 {
            return Err(RlfapError::MissingFields {
                line,
                expected: 2,
                actual: tokens.len(),
            });
        }

        let label = parse_int(tokens[0], line)?;
        let domain_id = parse_int(tokens[1], line)?;

        if !seen.insert(label) {
            return Err(RlfapError::DuplicateVariable {
                line,
                variable: label,
            });
        }

        variables.push((label, domain_id));
    }

    Ok(variables)
}

/// Parses a `ctr` file: per line two variable labels, an operator (`>` or `=`) and a threshold.
pub(crate) fn parse_constraints(source: &str) -> Result<Vec<RawConstraint>, RlfapError> {
    let mut constraints = Vec::new();

    for (line, tokens) in content_lines(source) {
        if tokens.len() < 4 {
            return Err(RlfapError::MissingFields {
                line,
                expected: 4,
                actual: tokens.len(),
            });
        }

        let a = parse_int(tokens[0], line)?;
        let b = parse_int(tokens[1], line)?;
        let operator = match tokens[2] {
            ">" => ConstraintOp::DifferenceExceeds,
            "=" => ConstraintOp::DifferenceEquals,
            other => {
                return Err(RlfapError::UnknownOperator {
                    line,
                    operator: other.to_owned(),
                })
            }
        };
        let threshold = parse_int(tokens[3], line)?;

        if a == b {
            return Err(RlfapError::SelfConstraint { line, variable: a });
        }

        constraints.push(RawConstraint {
            a,
            b,
            constraint: BinaryConstraint::new(operator, threshold),
        });
    }

    Ok(constraints)
}

/// Builds the model from the parsed pieces, resolving domain and variable references.
pub(crate) fn assemble_model(
    domains: &FnvHashMap<i32, Vec<i32>>,
    variables: &[(i32, i32)],
    constraints: &[RawConstraint],
) -> Result<ConstraintModel, RlfapError> {
    let mut model = ConstraintModel::default();

    for &(label, domain_id) in variables {
        let Some(values) = domains.get(&domain_id) else {
            return Err(RlfapError::UndefinedDomain {
                variable: label,
                domain: domain_id,
            });
        };
        let _ = model.new_variable(label, values.clone());
    }

    for raw in constraints {
        let a = model
            .variable_with_label(raw.a)
            .ok_or(RlfapError::UndefinedVariable { variable: raw.a })?;
        let b = model
            .variable_with_label(raw.b)
            .ok_or(RlfapError::UndefinedVariable { variable: raw.b })?;
        model.add_constraint(a, b, raw.constraint);
    }

    Ok(model)
}

/// The content lines of an instance file: the count header on the first line and blank lines
/// are skipped, every other line is split into whitespace-separated tokens and paired with its
/// 1-based line number.
fn content_lines<'a>(source: &'a str) -> impl Iterator<Item = (usize, Vec<&'a str>)> + 'a {
    source
        .lines()
        .enumerate()
        .skip(1)
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(number, line)| (number + 1, line.split_whitespace().collect()))
}

fn parse_int(token: &str, line: usize) -> Result<i32, RlfapError> {
    token.parse().map_err(|_| RlfapError::InvalidInteger {
        line,
        token: token.to_owned(),
    })
}
