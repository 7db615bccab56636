//! Demos for the creational patterns.

use crate::config::Config;
use crate::creational::abstract_factory::{
    Courier, DomesticCourier, InternationalCourier, PostalShipment,
};
use crate::creational::factory_method::{DotaTeam, FootballTeam, SportTeam};
use crate::creational::singleton::Authorizer;
use crate::output::LineSink;

use super::{Demo, DemoKind};

pub struct AbstractFactoryDemo;

impl Demo for AbstractFactoryDemo {
    fn kind(&self) -> DemoKind {
        DemoKind::AbstractFactory
    }

    fn execute(&self, out: &dyn LineSink, _config: &Config) -> anyhow::Result<()> {
        let couriers: [&dyn Courier; 2] = [&DomesticCourier, &InternationalCourier];
        for courier in couriers {
            out.write_line(&PostalShipment::new(courier).deliver());
        }
        Ok(())
    }
}

pub struct FactoryMethodDemo;

impl Demo for FactoryMethodDemo {
    fn kind(&self) -> DemoKind {
        DemoKind::FactoryMethod
    }

    fn execute(&self, out: &dyn LineSink, _config: &Config) -> anyhow::Result<()> {
        let teams: [&dyn SportTeam; 2] = [&FootballTeam, &DotaTeam];
        for team in teams {
            out.write_line(&format!("{} players:", team.title()));
            for player in team.create_team() {
                out.write_line(&format!(" - {}", player.name()));
            }
        }
        Ok(())
    }
}

pub struct SingletonDemo;

impl Demo for SingletonDemo {
    fn kind(&self) -> DemoKind {
        DemoKind::Singleton
    }

    fn execute(&self, out: &dyn LineSink, _config: &Config) -> anyhow::Result<()> {
        let handles: Vec<&Authorizer> = (0..4).map(|_| Authorizer::instance()).collect();
        let identical = handles.windows(2).all(|w| std::ptr::eq(w[0], w[1]));
        out.write_line(&format!("All variables are the same? {}", identical));
        Ok(())
    }
}
