use std::time::Duration;

use marconi_solver::model::BinaryConstraint;
use marconi_solver::model::ConstraintModel;
use marconi_solver::model::ConstraintOp;
use marconi_solver::results::SatisfactionResult;
use marconi_solver::results::Solution;
use marconi_solver::termination::AssignmentBudget;
use marconi_solver::termination::Indefinite;
use marconi_solver::termination::TimeBudget;
use marconi_solver::Solver;

/// Checks that the solution satisfies every constraint of the model.
fn assert_sound(model: &ConstraintModel, solution: &Solution) {
    assert_eq!(solution.num_variables(), model.num_variables());

    for a in model.variables() {
        for b in model.variables() {
            if a >= b {
                continue;
            }
            if let Some(constraint) = model.constraint_between(a, b) {
                assert!(
                    constraint.is_satisfied(solution.value(a), solution.value(b)),
                    "constraint {constraint} between {a} and {b} is violated by \
                     {} and {}",
                    solution.value(a),
                    solution.value(b),
                );
            }
        }
    }
}

fn satisfy(model: ConstraintModel) -> (Solver, SatisfactionResult) {
    let mut solver = Solver::with_model(model);
    let mut selector = solver.default_selector();
    let result = solver.satisfy(&mut selector, &mut Indefinite);
    (solver, result)
}

#[test]
fn a_distance_constrained_pair_is_assigned_far_apart_values() {
    let mut model = ConstraintModel::default();
    let x = model.new_variable(1, vec![0, 1, 2]);
    let y = model.new_variable(2, vec![0, 1, 2]);
    model.add_constraint(x, y, BinaryConstraint::new(ConstraintOp::DifferenceExceeds, 1));

    let (solver, result) = satisfy(model);

    let SatisfactionResult::Satisfiable(solution) = result else {
        panic!("expected a solution, got {result:?}");
    };
    assert_sound(solver.model(), &solution);
    // Only the extremes are more than 1 apart in {0, 1, 2}.
    assert_eq!((solution.value(x) - solution.value(y)).abs(), 2);
}

#[test]
fn an_instance_with_a_single_value_conflict_is_unsatisfiable() {
    let mut model = ConstraintModel::default();
    let x = model.new_variable(1, vec![0]);
    let y = model.new_variable(2, vec![0]);
    model.add_constraint(x, y, BinaryConstraint::new(ConstraintOp::DifferenceExceeds, 0));

    let (_, result) = satisfy(model);

    assert!(matches!(result, SatisfactionResult::Unsatisfiable));
}

#[test]
fn an_odd_cycle_of_binary_domains_is_unsatisfiable() {
    // Three mutually "different" variables over two values: a 2-colouring of a triangle.
    let mut model = ConstraintModel::default();
    let a = model.new_variable(1, vec![0, 1]);
    let b = model.new_variable(2, vec![0, 1]);
    let c = model.new_variable(3, vec![0, 1]);
    for (x, y) in [(a, b), (b, c), (a, c)] {
        model.add_constraint(x, y, BinaryConstraint::new(ConstraintOp::DifferenceExceeds, 0));
    }

    let (_, result) = satisfy(model);

    assert!(matches!(result, SatisfactionResult::Unsatisfiable));
}

#[test]
fn an_empty_domain_makes_the_instance_unsatisfiable() {
    let mut model = ConstraintModel::default();
    let _ = model.new_variable(1, vec![3, 4, 5]);
    let _ = model.new_variable(2, Vec::new());

    let (solver, result) = satisfy(model);

    assert!(matches!(result, SatisfactionResult::Unsatisfiable));
    // The wiped-out variable is selected first, so nothing is ever assigned.
    assert_eq!(solver.number_of_assignments(), 0);
}

#[test]
fn a_chain_of_exact_distances_is_solved() {
    // x0 .. x4 with |x_i - x_{i+1}| = 2 over domain {0, 2, 4, 6, 8}.
    let mut model = ConstraintModel::default();
    let variables = (0..5)
        .map(|i| model.new_variable(i, vec![0, 2, 4, 6, 8]))
        .collect::<Vec<_>>();
    for window in variables.windows(2) {
        model.add_constraint(
            window[0],
            window[1],
            BinaryConstraint::new(ConstraintOp::DifferenceEquals, 2),
        );
    }

    let (solver, result) = satisfy(model);

    let SatisfactionResult::Satisfiable(solution) = result else {
        panic!("expected a solution, got {result:?}");
    };
    assert_sound(solver.model(), &solution);
}

#[test]
fn repeated_runs_are_deterministic() {
    let mut model = ConstraintModel::default();
    let mut variables = Vec::new();
    for i in 0..6 {
        variables.push(model.new_variable(i, vec![0, 1, 2, 3, 4]));
    }
    for window in variables.windows(2) {
        model.add_constraint(
            window[0],
            window[1],
            BinaryConstraint::new(ConstraintOp::DifferenceExceeds, 1),
        );
    }
    model.add_constraint(
        variables[0],
        variables[5],
        BinaryConstraint::new(ConstraintOp::DifferenceExceeds, 2),
    );

    let (first_solver, first) = satisfy(model.clone());
    let (second_solver, second) = satisfy(model);

    let SatisfactionResult::Satisfiable(first) = first else {
        panic!("expected a solution");
    };
    let SatisfactionResult::Satisfiable(second) = second else {
        panic!("expected a solution");
    };

    assert!(first.iter().eq(second.iter()));
    assert_eq!(
        first_solver.number_of_assignments(),
        second_solver.number_of_assignments()
    );
}

#[test]
fn an_exhausted_time_budget_reports_unknown() {
    let mut model = ConstraintModel::default();
    let x = model.new_variable(1, vec![0, 1, 2]);
    let y = model.new_variable(2, vec![0, 1, 2]);
    model.add_constraint(x, y, BinaryConstraint::new(ConstraintOp::DifferenceExceeds, 1));

    let mut solver = Solver::with_model(model);
    let mut selector = solver.default_selector();
    let mut termination = TimeBudget::starting_now(Duration::ZERO);

    let result = solver.satisfy(&mut selector, &mut termination);
    assert!(matches!(result, SatisfactionResult::Unknown));
}

#[test]
fn a_spent_assignment_budget_reports_unknown() {
    let mut model = ConstraintModel::default();
    let variables = (0..3)
        .map(|i| model.new_variable(i, vec![0, 1, 2, 3]))
        .collect::<Vec<_>>();
    for window in variables.windows(2) {
        model.add_constraint(
            window[0],
            window[1],
            BinaryConstraint::new(ConstraintOp::DifferenceExceeds, 0),
        );
    }

    let mut solver = Solver::with_model(model);
    let mut selector = solver.default_selector();
    let mut termination = AssignmentBudget::new(1);

    let result = solver.satisfy(&mut selector, &mut termination);
    assert!(matches!(result, SatisfactionResult::Unknown));
    assert_eq!(solver.number_of_assignments(), 1);
}
