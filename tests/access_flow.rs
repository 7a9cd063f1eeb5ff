//! End-to-end access control flows through the public API

use std::collections::HashSet;

use fuelnet_rbac::{
    AccessScope, RbacConfig, RbacEngine, Role, RoleAssignment, RoleDraft, RoleRegistry,
    ScopeLevel, build_role_hierarchy,
};

#[test]
fn network_admin_manages_own_network_only() {
    let engine = RbacEngine::new(&RbacConfig::default()).unwrap();
    let registry = RoleRegistry::with_system_roles();
    let roles = registry.to_vec();

    let assignments =
        vec![RoleAssignment::new("u_net", "network_admin", "u_root").for_network("N1")];

    let own = engine.check_access(
        &assignments,
        &roles,
        "prices.update",
        &AccessScope::network("N1"),
    );
    assert!(own.has_access, "reason: {}", own.reason);

    let other = engine.check_access(
        &assignments,
        &roles,
        "prices.update",
        &AccessScope::network("N2"),
    );
    assert!(!other.has_access);

    let global = engine.check_access(
        &assignments,
        &roles,
        "prices.update",
        &AccessScope::Global,
    );
    assert!(!global.has_access);
}

#[test]
fn custom_role_lifecycle() {
    let engine = RbacEngine::new(&RbacConfig::default()).unwrap();
    let mut registry = RoleRegistry::with_system_roles();

    // Validate, then store, then evaluate against the stored list
    let draft = RoleDraft {
        name: "Night shift lead".to_string(),
        code: "night_shift_lead".to_string(),
        description: String::new(),
        scope: ScopeLevel::TradingPoint,
        permissions: HashSet::from(["tanks.read".to_string(), "workflows.execute".to_string()]),
        parent_role_id: Some("operator".to_string()),
    };
    let validation = engine.validate_role(&draft, &registry.to_vec());
    assert!(validation.is_valid, "errors: {:?}", validation.errors);

    let role = Role::new("night_shift_lead", "night_shift_lead", draft.scope)
        .with_permissions(draft.permissions.iter().cloned())
        .with_parent("operator");
    registry.insert(role).unwrap();

    let roles = registry.to_vec();
    let assignments =
        vec![RoleAssignment::new("u_lead", "night_shift_lead", "u_mgr").for_trading_point("T9")];

    // Own grant plus one inherited from operator
    assert!(
        engine
            .check_access(
                &assignments,
                &roles,
                "workflows.execute",
                &AccessScope::trading_point("T9")
            )
            .has_access
    );
    assert!(
        engine
            .check_access(
                &assignments,
                &roles,
                "prices.read",
                &AccessScope::trading_point("T9")
            )
            .has_access
    );

    let forest = build_role_hierarchy(&roles);
    let operator = forest.iter().find(|n| n.role.id == "operator").unwrap();
    assert_eq!(operator.children[0].role.id, "night_shift_lead");
}

#[test]
fn delegation_through_builtin_roles() {
    let engine = RbacEngine::new(&RbacConfig::default()).unwrap();
    let roles = RoleRegistry::with_system_roles().to_vec();
    let viewer = roles.iter().find(|r| r.id == "viewer").unwrap();
    let network_admin = roles.iter().find(|r| r.id == "network_admin").unwrap();

    // A system admin may grant anything
    let root = vec![RoleAssignment::new("u_root", "system_admin", "seed")];
    let decision =
        engine.can_assign_role(&root, &roles, network_admin, &AccessScope::network("N1"));
    assert!(decision.can_assign);

    // A network admin may hand out viewer within their network
    let net = vec![RoleAssignment::new("u_net", "network_admin", "u_root").for_network("N1")];
    let decision = engine.can_assign_role(&net, &roles, viewer, &AccessScope::network("N1"));
    assert!(decision.can_assign, "reason: {}", decision.reason);

    // A viewer cannot delegate at all
    let watcher = vec![RoleAssignment::new("u_view", "viewer", "u_net").for_trading_point("T1")];
    let decision = engine.can_assign_role(
        &watcher,
        &roles,
        viewer,
        &AccessScope::trading_point("T1"),
    );
    assert!(!decision.can_assign);
}

#[test]
fn tenant_specific_catalog_from_yaml() {
    let yaml = r#"
enabled: true
permissions:
  - code: pumps.read
    name: View pumps
    description: View pump status
    resource: pumps
    action: read
  - code: pumps.update
    name: Edit pumps
    description: Reconfigure pumps
    resource: pumps
    action: update
roles:
  - id: pump_tech
    name: Pump technician
    code: pump_tech
    scope: trading_point
    permissions: ["pumps.*"]
"#;
    let config = RbacConfig::from_yaml(yaml).unwrap();
    let engine = RbacEngine::new(&config).unwrap();

    assert!(engine.catalog().contains("pumps.read"));
    assert!(!engine.catalog().contains("prices.read"));

    let roles = config.roles.clone();
    let assignments =
        vec![RoleAssignment::new("u_tech", "pump_tech", "admin").for_trading_point("T1")];
    assert!(
        engine
            .check_access(
                &assignments,
                &roles,
                "pumps.update",
                &AccessScope::trading_point("T1")
            )
            .has_access
    );

    // The tenant catalog rejects codes from the default vocabulary
    let draft = RoleDraft {
        name: "Pricing".to_string(),
        code: "pricing".to_string(),
        description: String::new(),
        scope: ScopeLevel::Network,
        permissions: HashSet::from(["prices.update".to_string()]),
        parent_role_id: None,
    };
    let validation = engine.validate_role(&draft, &roles);
    assert!(!validation.is_valid);
    assert!(validation.errors[0].contains("prices.update"));
}
