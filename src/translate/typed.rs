//! Type-tagged axioms: `x rdf:type T`.
//!
//! Declarations tag an IRI with an entity type; property characteristics tag
//! a property expression with one of the OWL characteristic classes.

use super::family::Family;
use super::{expect_role, render, with_predicate, write_invariant};
use crate::config::AxiomsConfig;
use crate::error::TranslateResult;
use crate::factory::ObjectFactory;
use crate::graph::roles::{Role, declared_kinds};
use crate::graph::{Graph, Term, Triple};
use crate::model::{AnnotatedAxiom, Axiom, AxiomKind, Entity, EntityKind, SubObject};
use crate::vocab::{builtins, owl, rdf};

/// `Declaration(Kind(e))` as `e rdf:type owl:Kind`.
pub(crate) struct Declaration;

impl Family for Declaration {
    fn kind(&self) -> AxiomKind {
        AxiomKind::Declaration
    }

    fn enabled(&self, config: &AxiomsConfig) -> bool {
        config.allow_read_declarations
    }

    fn candidates<'a>(
        &'a self,
        graph: &'a Graph,
        _config: &'a AxiomsConfig,
    ) -> Box<dyn Iterator<Item = Triple> + 'a> {
        Box::new(
            EntityKind::ALL
                .into_iter()
                .flat_map(move |kind| with_predicate(graph, rdf::TYPE, Some(kind.type_iri()))),
        )
    }

    fn recognise(&self, graph: &Graph, triple: &Triple, config: &AxiomsConfig) -> Result<(), String> {
        let Term::Iri(iri) = &triple.subject else {
            return Err("declared entity must be an IRI".into());
        };
        let Some(type_iri) = triple.object.as_iri() else {
            return Err("declaration type must be an IRI".into());
        };
        if EntityKind::from_type_iri(type_iri.as_str()).is_none() {
            return Err(format!("{type_iri} is not an entity type"));
        }
        let b = builtins();
        if b.is_builtin(iri.as_str()) || b.is_reserved(iri.as_str()) {
            return Err(format!("{iri} is standard vocabulary"));
        }
        let kinds = declared_kinds(graph, iri);
        if !config.punning.allows(&kinds) {
            return Err(format!("{iri} is punned beyond {} mode", config.punning));
        }
        Ok(())
    }

    fn components(
        &self,
        _graph: &Graph,
        triple: &Triple,
        _factory: &dyn ObjectFactory,
        _config: &AxiomsConfig,
    ) -> TranslateResult<Vec<SubObject>> {
        let entity = triple
            .subject
            .as_iri()
            .zip(triple.object.as_iri())
            .and_then(|(iri, t)| Some(Entity::new(EntityKind::from_type_iri(t.as_str())?, iri.clone())));
        Ok(entity.map(SubObject::Entity).into_iter().collect())
    }

    fn needs_deep_check(&self, _triple: &Triple) -> bool {
        false
    }

    fn emit(&self, axiom: &AnnotatedAxiom, graph: &mut Graph) -> TranslateResult<Vec<Triple>> {
        let Axiom::Declaration(entity) = &axiom.axiom else {
            return Err(write_invariant(self.kind(), "not a declaration"));
        };
        if builtins().is_reserved(entity.iri.as_str()) {
            return Err(write_invariant(
                self.kind(),
                format!("{} is reserved vocabulary", entity.iri),
            ));
        }
        let triple = Triple::new(entity.iri.clone(), rdf::TYPE, Term::iri(entity.kind.type_iri()));
        graph.add(triple.clone());
        Ok(vec![triple])
    }
}

/// A property characteristic: `p rdf:type owl:TransitiveProperty` and friends.
pub(crate) struct Characteristic {
    kind: AxiomKind,
    type_iri: &'static str,
    role: Role,
}

impl Characteristic {
    pub(crate) fn all() -> Vec<Characteristic> {
        let ope = Role::ObjectPropertyExpression;
        [
            (AxiomKind::FunctionalObjectProperty, owl::FUNCTIONAL_PROPERTY, ope),
            (
                AxiomKind::InverseFunctionalObjectProperty,
                owl::INVERSE_FUNCTIONAL_PROPERTY,
                ope,
            ),
            (AxiomKind::ReflexiveObjectProperty, owl::REFLEXIVE_PROPERTY, ope),
            (AxiomKind::IrreflexiveObjectProperty, owl::IRREFLEXIVE_PROPERTY, ope),
            (AxiomKind::SymmetricObjectProperty, owl::SYMMETRIC_PROPERTY, ope),
            (AxiomKind::AsymmetricObjectProperty, owl::ASYMMETRIC_PROPERTY, ope),
            (AxiomKind::TransitiveObjectProperty, owl::TRANSITIVE_PROPERTY, ope),
            (
                AxiomKind::FunctionalDataProperty,
                owl::FUNCTIONAL_PROPERTY,
                Role::DataProperty,
            ),
        ]
        .into_iter()
        .map(|(kind, type_iri, role)| Characteristic {
            kind,
            type_iri,
            role,
        })
        .collect()
    }
}

impl Family for Characteristic {
    fn kind(&self) -> AxiomKind {
        self.kind
    }

    fn candidates<'a>(
        &'a self,
        graph: &'a Graph,
        _config: &'a AxiomsConfig,
    ) -> Box<dyn Iterator<Item = Triple> + 'a> {
        with_predicate(graph, rdf::TYPE, Some(self.type_iri))
    }

    fn recognise(&self, graph: &Graph, triple: &Triple, config: &AxiomsConfig) -> Result<(), String> {
        if triple.predicate.as_str() != rdf::TYPE || !triple.object.is(self.type_iri) {
            return Err(format!("not typed {}", self.type_iri));
        }
        expect_role(graph, &triple.subject, self.role, config)
    }

    fn components(
        &self,
        graph: &Graph,
        triple: &Triple,
        factory: &dyn ObjectFactory,
        config: &AxiomsConfig,
    ) -> TranslateResult<Vec<SubObject>> {
        Ok(vec![factory.resolve(graph, &triple.subject, self.role, config)?])
    }

    fn emit(&self, axiom: &AnnotatedAxiom, graph: &mut Graph) -> TranslateResult<Vec<Triple>> {
        let components = axiom.axiom.components();
        let [property] = components.as_slice() else {
            return Err(write_invariant(self.kind, "expected one property"));
        };
        let subject = render::render_sub(graph, property);
        let triple = Triple::new(subject, rdf::TYPE, Term::iri(self.type_iri));
        graph.add(triple.clone());
        Ok(vec![triple])
    }
}
