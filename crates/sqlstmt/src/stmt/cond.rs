//! Condition primitives for WHERE/HAVING clauses.
//!
//! Every accepted input shape is normalized into a [`Condition`] once, at
//! the statement entry point; rendering never branches on input shape again.

use crate::error::StmtResult;
use crate::ident::Escaper;
use crate::param::Params;
use crate::value::Value;

/// A single normalized condition.
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    /// Raw SQL fragment, emitted verbatim with no placeholder.
    ///
    /// # Safety
    /// Be careful with SQL injection when using raw conditions.
    Raw(String),
    /// `field <op> ?` — contributes exactly one placeholder and one value.
    Compare {
        field: String,
        op: String,
        value: Value,
    },
    /// Parenthesized sub-expression, AND-joined recursively.
    Group(Vec<Condition>),
}

impl Condition {
    /// Create a raw SQL condition.
    pub fn raw(sql: impl Into<String>) -> Self {
        Self::Raw(sql.into())
    }

    /// Create an equality condition: `field=?`
    pub fn eq(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::cmp(field, "=", value)
    }

    /// Create a comparison with an explicit operator, emitted verbatim.
    pub fn cmp(
        field: impl Into<String>,
        op: impl Into<String>,
        value: impl Into<Value>,
    ) -> Self {
        Self::Compare {
            field: field.into(),
            op: op.into(),
            value: value.into(),
        }
    }

    /// Create a nested group: `(c1 AND c2 ...)`
    pub fn group(conditions: Vec<Condition>) -> Self {
        Self::Group(conditions)
    }

    /// Check if this condition renders nothing.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Raw(sql) => sql.is_empty(),
            Self::Compare { .. } => false,
            Self::Group(inner) => inner.iter().all(Condition::is_empty),
        }
    }

    /// Render the SQL fragment, binding values into `params` in clause order.
    pub(crate) fn build(&self, escaper: &Escaper, params: &mut Params) -> StmtResult<String> {
        match self {
            Self::Raw(sql) => Ok(sql.clone()),
            Self::Compare { field, op, value } => {
                // No spaces around the operator: `user_id`=?
                let field = escaper.escape(field)?;
                let placeholder = params.bind(value.clone());
                Ok(format!("{field}{op}{placeholder}"))
            }
            Self::Group(inner) => {
                let sql = join_and(inner, escaper, params)?;
                if sql.is_empty() {
                    Ok(String::new())
                } else {
                    Ok(format!("({sql})"))
                }
            }
        }
    }
}

/// Render a condition list joined with `" AND "`, skipping empty fragments.
pub(crate) fn join_and(
    conditions: &[Condition],
    escaper: &Escaper,
    params: &mut Params,
) -> StmtResult<String> {
    let mut parts = Vec::with_capacity(conditions.len());
    for cond in conditions {
        let sql = cond.build(escaper, params)?;
        if !sql.is_empty() {
            parts.push(sql);
        }
    }
    Ok(parts.join(" AND "))
}

/// Conversion of the accepted condition input shapes into [`Condition`]s.
///
/// This is where the loosely-typed call patterns of the public API collapse
/// into one canonical representation:
///
/// - a string is one raw fragment
/// - a list of strings is one raw fragment each
/// - a list of `(field, value)` pairs is one equality each, order preserved
/// - a list of `(field, op, value)` triples is one comparison each
/// - `Condition` / `Vec<Condition>` pass through for mixed shapes
pub trait IntoConditions {
    /// Normalize into a flat list of top-level conditions.
    fn into_conditions(self) -> Vec<Condition>;
}

impl IntoConditions for Condition {
    fn into_conditions(self) -> Vec<Condition> {
        vec![self]
    }
}

impl IntoConditions for Vec<Condition> {
    fn into_conditions(self) -> Vec<Condition> {
        self
    }
}

impl IntoConditions for &str {
    fn into_conditions(self) -> Vec<Condition> {
        vec![Condition::raw(self)]
    }
}

impl IntoConditions for String {
    fn into_conditions(self) -> Vec<Condition> {
        vec![Condition::Raw(self)]
    }
}

impl IntoConditions for Vec<&str> {
    fn into_conditions(self) -> Vec<Condition> {
        self.into_iter().map(Condition::raw).collect()
    }
}

impl<F, V> IntoConditions for Vec<(F, V)>
where
    F: Into<String>,
    V: Into<Value>,
{
    fn into_conditions(self) -> Vec<Condition> {
        self.into_iter()
            .map(|(field, value)| Condition::eq(field, value))
            .collect()
    }
}

impl<F, O, V> IntoConditions for Vec<(F, O, V)>
where
    F: Into<String>,
    O: Into<String>,
    V: Into<Value>,
{
    fn into_conditions(self) -> Vec<Condition> {
        self.into_iter()
            .map(|(field, op, value)| Condition::cmp(field, op, value))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compare_renders_unspaced() {
        let esc = Escaper::default();
        let mut params = Params::new();
        let sql = Condition::eq("user_id", 10i64).build(&esc, &mut params).unwrap();
        assert_eq!(sql, "`user_id`=?");
        assert_eq!(params.as_slice(), &[Value::Int(10)]);
    }

    #[test]
    fn operator_emitted_verbatim() {
        let esc = Escaper::default();
        let mut params = Params::new();
        let sql = Condition::cmp("name", "like", "a%")
            .build(&esc, &mut params)
            .unwrap();
        assert_eq!(sql, "`name`like?");
    }

    #[test]
    fn raw_binds_nothing() {
        let esc = Escaper::default();
        let mut params = Params::new();
        let sql = Condition::raw("deleted_at IS NULL")
            .build(&esc, &mut params)
            .unwrap();
        assert_eq!(sql, "deleted_at IS NULL");
        assert!(params.is_empty());
    }

    #[test]
    fn group_renders_parenthesized() {
        let esc = Escaper::default();
        let mut params = Params::new();
        let cond = Condition::group(vec![
            Condition::eq("a", 1i64),
            Condition::eq("b", 2i64),
        ]);
        assert_eq!(cond.build(&esc, &mut params).unwrap(), "(`a`=? AND `b`=?)");
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn nested_group_keeps_value_order() {
        let esc = Escaper::default();
        let mut params = Params::new();
        let conds = vec![
            Condition::eq("a", 1i64),
            Condition::group(vec![
                Condition::eq("b", 2i64),
                Condition::group(vec![Condition::eq("c", 3i64)]),
            ]),
        ];
        let sql = join_and(&conds, &esc, &mut params).unwrap();
        assert_eq!(sql, "`a`=? AND (`b`=? AND (`c`=?))");
        assert_eq!(
            params.as_slice(),
            &[Value::Int(1), Value::Int(2), Value::Int(3)]
        );
    }

    #[test]
    fn empty_group_renders_nothing() {
        let esc = Escaper::default();
        let mut params = Params::new();
        let sql = join_and(
            &[Condition::group(vec![]), Condition::eq("a", 1i64)],
            &esc,
            &mut params,
        )
        .unwrap();
        assert_eq!(sql, "`a`=?");
    }

    #[test]
    fn pair_list_normalizes_to_equalities() {
        let conds = vec![("user_id", 10i64), ("age", 30i64)].into_conditions();
        assert_eq!(
            conds,
            vec![Condition::eq("user_id", 10i64), Condition::eq("age", 30i64)]
        );
    }

    #[test]
    fn triple_list_normalizes_to_comparisons() {
        let conds = vec![("age", ">", 18i64)].into_conditions();
        assert_eq!(conds, vec![Condition::cmp("age", ">", 18i64)]);
    }

    #[test]
    fn string_list_normalizes_to_raw() {
        let conds = vec!["a=1", "b=2"].into_conditions();
        assert_eq!(conds, vec![Condition::raw("a=1"), Condition::raw("b=2")]);
    }
}
