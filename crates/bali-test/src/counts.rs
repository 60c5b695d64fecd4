// Bali Document Notation - Rust implementation
//
// Copyright (c) 2025 Bali Notation contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Tree counting utilities.
//!
//! Functions for counting components and statements in parsed fixtures.

use bali_core::{Clause, Collection, Component, Entity, Procedure, Statement};

/// Count components in a tree, the root and parameter values included.
pub fn count_components(component: &Component) -> usize {
    let mut count = 1;
    if let Some(context) = &component.context {
        count += context.parameters.values().map(count_components).sum::<usize>();
    }
    count
        + match &component.entity {
            Entity::Collection(Collection::List(list)) => list.iter().map(count_components).sum(),
            Entity::Collection(Collection::Catalog(catalog)) => catalog
                .iter()
                .map(|(key, value)| count_components(key) + count_components(value))
                .sum(),
            _ => 0,
        }
}

/// Count statements in a tree, nested procedures included.
pub fn count_statements(component: &Component) -> usize {
    let nested: usize = match &component.entity {
        Entity::Collection(Collection::List(list)) => list.iter().map(count_statements).sum(),
        Entity::Collection(Collection::Catalog(catalog)) => {
            catalog.values().map(count_statements).sum()
        }
        Entity::Procedure(procedure) => statements_in(procedure),
        Entity::Statement(statement) => statements_below(statement) + 1,
        _ => 0,
    };
    let parameters: usize = component
        .context
        .iter()
        .flat_map(|context| context.parameters.values())
        .map(count_statements)
        .sum();
    nested + parameters
}

fn statements_in(procedure: &Procedure) -> usize {
    procedure
        .statements()
        .map(|statement| 1 + statements_below(statement))
        .sum()
}

fn statements_below(statement: &Statement) -> usize {
    let procedures: Vec<&Procedure> = match &statement.clause {
        Clause::If { procedure, .. }
        | Clause::While { procedure, .. }
        | Clause::With { procedure, .. } => vec![procedure],
        Clause::Select { cases, .. } => cases.iter().map(|case| &case.procedure).collect(),
        _ => Vec::new(),
    };
    let handlers = statement
        .on_clause
        .iter()
        .flat_map(|on_clause| on_clause.handlers.iter())
        .map(|handler| statements_in(&handler.procedure));
    procedures.into_iter().map(statements_in).sum::<usize>() + handlers.sum::<usize>()
}
